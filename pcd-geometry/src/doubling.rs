//! Exact-count vertex buffer construction by binary doubling.
//!
//! Starting from the one-vertex seed, `p = floor(log2(n))` rounds each
//! duplicate the whole working buffer. The copies made in round `i` form
//! generation `i` and hold `2^i` vertices, so after the rounds the working
//! buffer has `2^p` vertices. The result is then composed by walking the
//! bits of `n` from the least significant upwards: every set bit `i < p`
//! contributes a copy of generation `i`, and the leading bit `p` contributes
//! a copy of the whole working buffer. The sizes sum to exactly `n`.
//!
//! Generations are tracked as explicit index sets into the working buffer.

use crate::{buffer::GeometryBuffer, error::GeometryError};

pub type IndexSet = Vec<usize>;

/// Index sets created during the doubling rounds.
#[derive(Debug, Clone, Default)]
pub struct GenerationTable {
    generations: Vec<IndexSet>,
    working_len: usize,
}

impl GenerationTable {
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn members(&self, generation: u32) -> Option<&[usize]> {
        self.generations
            .get(generation as usize)
            .map(|members| members.as_slice())
    }

    fn record(&mut self, members: IndexSet, working_len: usize) {
        self.generations.push(members);
        self.working_len = working_len;
    }

    /// Vertices selected for bit `bit` of the target count. The leading bit
    /// stands for the whole working buffer.
    fn selection(&self, bit: u32, leading_bit: u32) -> Result<IndexSet, GeometryError> {
        if bit == leading_bit {
            return Ok((0..self.working_len).collect());
        }
        let members = self
            .members(bit)
            .ok_or(GeometryError::UndefinedGeneration {
                generation: bit,
                available: self.generations.len(),
            })?;
        if members.is_empty() {
            return Err(GeometryError::EmptyGeneration { generation: bit });
        }
        Ok(members.to_vec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryDoublingBuilder {
    target: usize,
}

impl BinaryDoublingBuilder {
    pub fn new(target: usize) -> Self {
        Self { target }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Number of whole-buffer doubling rounds.
    pub fn rounds(&self) -> u32 {
        if self.target == 0 {
            0
        } else {
            self.target.ilog2()
        }
    }

    /// Bit positions of the target count that are set, least significant first.
    pub fn composition_bits(&self) -> Vec<u32> {
        (0..=self.rounds())
            .filter(|bit| self.target >> bit & 1 == 1)
            .collect()
    }

    /// Total number of bulk duplications the build performs.
    pub fn duplication_count(&self) -> usize {
        self.rounds() as usize + self.composition_bits().len()
    }

    pub fn build(&self) -> Result<GeometryBuffer, GeometryError> {
        self.build_from(GeometryBuffer::seed())
    }

    /// Grows `seed` to exactly `target` vertices. A zero target returns the
    /// seed untouched.
    pub fn build_from(&self, seed: GeometryBuffer) -> Result<GeometryBuffer, GeometryError> {
        if self.target == 0 {
            return Ok(seed);
        }

        let (working, generations) = self.double(seed);
        let result = self.compose(&working, &generations)?;

        log::debug!(
            "built {} vertices with {} doubling rounds and {} compositions",
            result.len(),
            generations.len(),
            self.composition_bits().len()
        );

        Ok(result)
    }

    fn double(&self, mut working: GeometryBuffer) -> (GeometryBuffer, GenerationTable) {
        let mut generations = GenerationTable {
            generations: Vec::with_capacity(self.rounds() as usize),
            working_len: working.len(),
        };

        for _ in 0..self.rounds() {
            let everything: IndexSet = (0..working.len()).collect();
            let copies = working.duplicate(&everything);
            generations.record(copies.collect(), working.len());
        }

        (working, generations)
    }

    fn compose(
        &self,
        working: &GeometryBuffer,
        generations: &GenerationTable,
    ) -> Result<GeometryBuffer, GeometryError> {
        let mut result = GeometryBuffer::with_capacity(self.target);

        for bit in self.composition_bits() {
            let selection = generations.selection(bit, self.rounds())?;
            result.extend_from(working, &selection);
        }

        if result.len() != self.target {
            return Err(GeometryError::LengthMismatch {
                vertices: result.len(),
                coordinates: self.target * 3,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_exact_counts() {
        for n in [1usize, 2, 3, 5, 7, 8, 1023, 1024, 1_000_001] {
            let buffer = BinaryDoublingBuilder::new(n).build().unwrap();
            assert_eq!(buffer.len(), n, "target {n}");
        }
    }

    #[test]
    fn builds_every_small_count() {
        for n in 1..=300usize {
            assert_eq!(BinaryDoublingBuilder::new(n).build().unwrap().len(), n);
        }
    }

    #[test]
    fn zero_leaves_seed_untouched() {
        let buffer = BinaryDoublingBuilder::new(0).build().unwrap();
        assert_eq!(buffer.len(), 1);
        assert!(buffer.is_seed());
    }

    #[test]
    fn five_uses_two_rounds_and_bits_zero_and_two() {
        let builder = BinaryDoublingBuilder::new(5);
        assert_eq!(builder.rounds(), 2);
        assert_eq!(builder.composition_bits(), vec![0, 2]);

        let (working, generations) = builder.double(GeometryBuffer::seed());
        assert_eq!(working.len(), 4);
        assert_eq!(generations.len(), 2);
        assert_eq!(generations.members(0), Some(&[1][..]));
        assert_eq!(generations.members(1), Some(&[2, 3][..]));

        let result = builder.compose(&working, &generations).unwrap();
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn generation_sizes_double() {
        let builder = BinaryDoublingBuilder::new(1 << 6);
        let (working, generations) = builder.double(GeometryBuffer::seed());
        assert_eq!(working.len(), 64);
        for i in 0..generations.len() as u32 {
            let members = generations.members(i).unwrap();
            assert_eq!(members.len(), 1 << i);
            assert_eq!(members[0], 1 << i);
        }
    }

    #[test]
    fn duplications_are_logarithmic() {
        let builder = BinaryDoublingBuilder::new(1_000_001);
        assert_eq!(builder.rounds(), 19);
        assert!(builder.duplication_count() <= 2 * 20);
        assert_eq!(BinaryDoublingBuilder::new(1).duplication_count(), 1);
    }

    #[test]
    fn missing_generation_is_an_invariant_violation() {
        let builder = BinaryDoublingBuilder::new(7);
        let (working, _) = builder.double(GeometryBuffer::seed());
        let truncated = GenerationTable {
            generations: vec![vec![1]],
            working_len: working.len(),
        };
        assert_eq!(
            builder.compose(&working, &truncated),
            Err(GeometryError::UndefinedGeneration {
                generation: 1,
                available: 1
            })
        );
    }

    #[test]
    fn seed_vertex_is_replicated() {
        let mut seed = GeometryBuffer::seed();
        seed.vertices_mut()[0].co = [0.5, -1.0, 2.0];
        let buffer = BinaryDoublingBuilder::new(11).build_from(seed).unwrap();
        assert_eq!(buffer.len(), 11);
        assert!(buffer.vertices().iter().all(|v| v.co == [0.5, -1.0, 2.0]));
    }
}
