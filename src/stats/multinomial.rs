//! Discrete probability distribution over dense integer outcomes.

use std::io::{Read, Write};

/// A probability mass function over outcome ids `[0, len)`.
///
/// Produced by the inference step and immutable once persisted. Outcomes
/// past the stored support are defined to have probability 0, so a sparse
/// producer may truncate trailing zeros without changing query results.
///
/// # Encoding
///
/// Self-describing dense layout: `u64 len`, then `len` IEEE-754 `f64`
/// values, all little-endian. Round-trips byte-exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Multinomial {
    probs: Vec<f64>,
}

impl Multinomial {
    /// Wrap a probability vector. Values are expected to be non-negative
    /// and sum to 1 within tolerance; neither is enforced here (that is a
    /// property of the producer, verified in tests).
    pub fn new(probs: Vec<f64>) -> Self {
        debug_assert!(probs.iter().all(|&p| p >= 0.0));
        Self { probs }
    }

    /// Build a distribution by normalizing non-negative counts.
    pub fn from_counts(counts: &[f64]) -> Self {
        let total: f64 = counts.iter().sum();
        if total <= 0.0 {
            return Self { probs: vec![0.0; counts.len()] };
        }
        Self {
            probs: counts.iter().map(|&c| c / total).collect(),
        }
    }

    /// Probability of the given outcome; 0 past the stored support.
    pub fn probability(&self, id: u64) -> f64 {
        self.probs.get(id as usize).copied().unwrap_or(0.0)
    }

    /// Number of outcomes with stored probability.
    pub fn support(&self) -> usize {
        self.probs.len()
    }

    /// Iterate `(outcome id, probability)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.probs.iter().enumerate().map(|(i, &p)| (i as u64, p))
    }

    /// Write the self-describing encoding.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&(self.probs.len() as u64).to_le_bytes())?;
        for p in &self.probs {
            writer.write_all(&p.to_le_bytes())?;
        }
        Ok(())
    }

    /// Read one encoded distribution. Fails with `UnexpectedEof` if the
    /// stream ends mid-record.
    pub fn read_from<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut u64_buf = [0u8; 8];
        reader.read_exact(&mut u64_buf)?;
        let len = u64::from_le_bytes(u64_buf) as usize;

        let mut probs = Vec::with_capacity(len.min(1 << 20));
        let mut f64_buf = [0u8; 8];
        for _ in 0..len {
            reader.read_exact(&mut f64_buf)?;
            probs.push(f64::from_le_bytes(f64_buf));
        }
        Ok(Self { probs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_support_reads_as_zero() {
        let m = Multinomial::new(vec![0.5, 0.5]);
        assert_eq!(m.probability(0), 0.5);
        assert_eq!(m.probability(2), 0.0);
        assert_eq!(m.probability(u64::MAX), 0.0);
    }

    #[test]
    fn from_counts_normalizes() {
        let m = Multinomial::from_counts(&[1.0, 3.0]);
        assert!((m.probability(0) - 0.25).abs() < 1e-12);
        assert!((m.probability(1) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn from_counts_all_zero() {
        let m = Multinomial::from_counts(&[0.0, 0.0]);
        assert_eq!(m.probability(0), 0.0);
        assert_eq!(m.support(), 2);
    }

    #[test]
    fn encoding_roundtrip_is_exact() {
        let m = Multinomial::new(vec![0.4, 0.3, 0.2, 0.1]);
        let mut buf = Vec::new();
        m.write_to(&mut buf).unwrap();
        // u64 len + 4 f64 values
        assert_eq!(buf.len(), 8 + 4 * 8);

        let back = Multinomial::read_from(&mut buf.as_slice()).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn truncated_record_is_unexpected_eof() {
        let m = Multinomial::new(vec![0.5, 0.5]);
        let mut buf = Vec::new();
        m.write_to(&mut buf).unwrap();
        buf.truncate(buf.len() - 3);

        let err = Multinomial::read_from(&mut buf.as_slice()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
