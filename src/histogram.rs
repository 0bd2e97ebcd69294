pub const SYMBOL_COUNT: usize = 256;

/// Normalized occurrence frequency of every byte value in a piece of data.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyHistogram {
    frequencies: [f64; SYMBOL_COUNT],
}

impl FrequencyHistogram {
    /// Each byte adds `1 / data.len()` to its own slot. Empty data leaves every
    /// slot at zero.
    pub fn build(data: &[u8]) -> Self {
        let mut frequencies = [0.0; SYMBOL_COUNT];
        if !data.is_empty() {
            let unit = 1.0 / data.len() as f64;
            for &b in data {
                frequencies[b as usize] += unit;
            }
        }

        Self { frequencies }
    }

    pub fn frequency_of(&self, symbol: u8) -> f64 {
        self.frequencies[symbol as usize]
    }

    pub fn size(&self) -> usize {
        self.frequencies.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.frequencies.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn size_is_fixed() {
        assert_eq!(FrequencyHistogram::build(&[]).size(), 256);
        assert_eq!(FrequencyHistogram::build(&[7]).size(), 256);
    }

    #[test]
    fn frequency_of() {
        let h = FrequencyHistogram::build(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 8]);

        assert_eq!(h.frequency_of(1), 0.1);
        assert_eq!(h.frequency_of(8), 0.2);
        assert_eq!(h.frequency_of(9), 0.0);
        assert_eq!(h.frequency_of(255), 0.0);
    }

    #[test]
    fn sums_to_one() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i * 31 % 251) as u8).collect();
        let h = FrequencyHistogram::build(&data);

        assert_abs_diff_eq!(h.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let h = FrequencyHistogram::build(&[]);
        assert!(h.iter().all(|f| f == 0.0));
    }
}
