use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use hypr_script::ProductFacts;

use crate::input;

pub fn run(
    reference: &Path,
    product: Option<&str>,
    brief: Option<&Path>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let (_, fingerprint) = hypr_script::analyze_reference(&input::read_text(reference)?);

    let facts = match (product, brief) {
        (Some(product), _) => input::read_product(product)?,
        (None, Some(brief)) => ProductFacts::from_brief(&input::read_text(brief)?),
        (None, None) => anyhow::bail!("either --product or --brief is required"),
    };

    let script = match seed {
        Some(seed) => {
            hypr_script::synthesize(&fingerprint, &facts, &mut StdRng::seed_from_u64(seed))
        }
        None => hypr_script::synthesize_unseeded(&fingerprint, &facts),
    };

    println!("{script}");
    Ok(())
}
