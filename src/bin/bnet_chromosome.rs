use gitsbe_model::{BooleanModel, ModelError, MutationType};

/// Loads a `.bnet` model, prints its chromosome under the given mutation type, and then
/// prints a number of randomly mutated chromosomes decoded back into `.bnet` models.
///
/// Usage: `bnet-chromosome <model.bnet> [mutation_type] [mutants] [flips]`
fn main() {
    env_logger::init();

    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        eprintln!("Usage: bnet-chromosome <model.bnet> [topology|balanced|mixed] [mutants] [flips]");
        std::process::exit(1);
    }

    if let Err(error) = run(&args[1..]) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), ModelError> {
    let mutation_type = match args.get(1) {
        Some(name) => name.parse::<MutationType>()?,
        None => MutationType::default(),
    };
    let mutants = parse_count(args.get(2), 3);
    let flips = parse_count(args.get(3), 1);

    let model = BooleanModel::from_bnet_file(&args[0], mutation_type)?;
    println!("# {} ({})", model.model_name(), mutation_type);
    println!("# chromosome: {}", render_bits(model.binary_boolean_equations()));
    println!("{}", model.to_bnet());

    for (i, chromosome) in model
        .generate_mutated_lists(mutants, flips)
        .into_iter()
        .enumerate()
    {
        let mut offspring = model.derive_offspring();
        offspring.set_model_name(&format!("{}_mutant_{}", model.model_name(), i));
        offspring.update_from_binary(&chromosome)?;
        println!();
        println!("# {}", offspring.model_name());
        println!("# chromosome: {}", render_bits(&chromosome));
        println!("{}", offspring.to_bnet());
    }
    Ok(())
}

fn parse_count(arg: Option<&String>, default: usize) -> usize {
    arg.and_then(|it| it.parse::<usize>().ok())
        .unwrap_or(default)
}

fn render_bits(bits: &[u8]) -> String {
    bits.iter().map(|it| it.to_string()).collect()
}
