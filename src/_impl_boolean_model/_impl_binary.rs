use crate::codec::flip_bits;
use crate::{BooleanEquation, BooleanModel, ModelError};
use log::debug;
use rand::Rng;

impl BooleanModel {
    /// Encode the working equations under the mutation type of this model and store the
    /// result as the chromosome of the model.
    pub fn to_binary(&mut self) -> &[u8] {
        self.binary_boolean_equations = self
            .mutation_type
            .codec()
            .encode(&self.updated_boolean_equations);
        &self.binary_boolean_equations
    }

    /// Number of bits in a chromosome of this model.
    pub fn encoded_len(&self) -> usize {
        self.mutation_type
            .codec()
            .encoded_len(&self.updated_boolean_equations)
    }

    /// Decode `chromosome` into the working equations, using the current working equations
    /// as the template, and store it as the chromosome of the model.
    ///
    /// Returns an error (and leaves the model unchanged) if the chromosome length does not
    /// match `encoded_len` or if it holds a value other than `0` or `1`.
    pub fn update_from_binary(&mut self, chromosome: &[u8]) -> Result<&[BooleanEquation], ModelError> {
        let equations = self
            .mutation_type
            .codec()
            .decode(&self.updated_boolean_equations, chromosome)?;
        debug!(
            "Model `{}` updated from a {} chromosome.",
            self.model_name, self.mutation_type
        );
        self.updated_boolean_equations = equations;
        self.source_bnet = None;
        self.binary_boolean_equations = chromosome.to_vec();
        Ok(&self.updated_boolean_equations)
    }

    /// Produce `num_mutations` mutants of the chromosome, each with `flips_per_list` random
    /// bit flips. The model itself is not modified.
    ///
    /// The chromosome of a model only ever holds `0` and `1`, since it is either encoded from
    /// the working equations or accepted by `update_from_binary`.
    pub fn generate_mutated_lists(
        &self,
        num_mutations: usize,
        flips_per_list: usize,
    ) -> Vec<Vec<u8>> {
        let mut rng = rand::thread_rng();
        self.generate_mutated_lists_with_rng(num_mutations, flips_per_list, &mut rng)
    }

    /// Same as `generate_mutated_lists`, but using the provided random generator.
    pub fn generate_mutated_lists_with_rng<R: Rng + ?Sized>(
        &self,
        num_mutations: usize,
        flips_per_list: usize,
        rng: &mut R,
    ) -> Vec<Vec<u8>> {
        flip_bits(
            &self.binary_boolean_equations,
            num_mutations,
            flips_per_list,
            rng,
        )
    }
}
