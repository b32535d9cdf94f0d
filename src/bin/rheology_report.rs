use rheology::base::{Dictionary, RheologyResult};
use rheology::field::{FvMesh, JsonStore, VolScalarField, VolSymmTensorField};
use rheology::material::{parse_scalar_argument, LawRegistry, RheologyModel};
use std::path::Path;
use std::rc::Rc;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "rheology_report",
    about = "Selects the rheology law of a case and prints the range of the material properties"
)]
struct Options {
    /// Case directory with mesh.json, rheologyProperties.json, and the time directories
    case_dir: String,

    /// Time directory holding the material indicator field
    #[structopt(long, default_value = "0")]
    time: String,

    /// Evaluates the time-dependent properties at this time
    #[structopt(long)]
    time_value: Option<String>,
}

fn print_range(field: &VolScalarField) {
    println!(
        "{:>8} {} min = {:<14e} max = {:<14e}",
        field.name(),
        field.dimensions(),
        field.min(),
        field.max()
    );
}

fn main() -> RheologyResult<()> {
    env_logger::init();

    // parse options
    let options = Options::from_args();
    let case = Path::new(&options.case_dir);

    // load the case
    let mesh = FvMesh::read_json(&case.join("mesh.json"))?
        .with_time_name(&options.time)
        .with_store(Box::new(JsonStore::new(case)));
    let mesh = Rc::new(mesh);
    let sigma = VolSymmTensorField::new("sigma", &mesh, false);
    let dict = Dictionary::read(&case.join("rheologyProperties.json"))?;

    // select the law
    let mut model = RheologyModel::new(&sigma, &dict, LawRegistry::global())?;
    model.correct()?;
    let law = model.law();

    // message
    let title = format!("law {} ({}) on {} cells", law.name(), law.type_name(), mesh.n_cells());
    let thin_line = format!("{:─^1$}", "", title.len());
    println!("\n{}\n{}\n{}", thin_line, title, thin_line);
    match &options.time_value {
        Some(text) => {
            let t = parse_scalar_argument(text)?;
            println!("time = {}", t);
            print_range(&law.rho_at(t)?);
            print_range(&law.e_at(t)?);
            print_range(&law.nu_at(t)?);
        }
        None => {
            print_range(&law.rho()?);
            print_range(&law.e()?);
            print_range(&law.nu()?);
        }
    }
    print_range(&law.ep()?);
    print_range(&law.sigma_y()?);
    print_range(&model.mu()?);
    print_range(&model.lambda()?);
    print_range(&model.three_k()?);
    println!("{}\n", thin_line);
    Ok(())
}
