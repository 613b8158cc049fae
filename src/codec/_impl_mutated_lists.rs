use crate::codec::check_bits;
use crate::ModelError;
use rand::Rng;

/// Produce `num_mutations` copies of `chromosome`, each with `flips_per_list` random bit flips.
///
/// Positions are drawn uniformly and independently, so the same bit can be flipped more than
/// once (and thus restored). The input is not modified. Returns an error if the chromosome
/// holds a value other than `0` or `1`.
pub fn generate_mutated_lists(
    chromosome: &[u8],
    num_mutations: usize,
    flips_per_list: usize,
) -> Result<Vec<Vec<u8>>, ModelError> {
    let mut rng = rand::thread_rng();
    generate_mutated_lists_with_rng(chromosome, num_mutations, flips_per_list, &mut rng)
}

/// Same as `generate_mutated_lists`, but using the provided random generator.
pub fn generate_mutated_lists_with_rng<R: Rng + ?Sized>(
    chromosome: &[u8],
    num_mutations: usize,
    flips_per_list: usize,
    rng: &mut R,
) -> Result<Vec<Vec<u8>>, ModelError> {
    check_bits(chromosome)?;
    Ok(flip_bits(chromosome, num_mutations, flips_per_list, rng))
}

/// **(internal)** Mutant generation for a chromosome that is known to be binary.
pub(crate) fn flip_bits<R: Rng + ?Sized>(
    chromosome: &[u8],
    num_mutations: usize,
    flips_per_list: usize,
    rng: &mut R,
) -> Vec<Vec<u8>> {
    (0..num_mutations)
        .map(|_| {
            let mut mutated = chromosome.to_vec();
            if !mutated.is_empty() {
                for _ in 0..flips_per_list {
                    let index = rng.gen_range(0..mutated.len());
                    mutated[index] = 1 - mutated[index];
                }
            }
            mutated
        })
        .collect()
}
