use std::fmt;

/// Depth calculates minimum, maximum, average and percentile of leaf-node
/// depths in the [`Llrb`] tree.
///
/// [`Llrb`]: crate::Llrb
#[derive(Clone, Debug, Default)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    histogram: Vec<usize>, // index is depth, item is number of samples.
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        if self.samples == 0 || depth < self.min {
            self.min = depth
        }
        if depth > self.max {
            self.max = depth
        }
        self.samples += 1;
        self.total += depth;
        if self.histogram.len() <= depth {
            self.histogram.resize(depth + 1, 0);
        }
        self.histogram[depth] += 1;
    }

    /// Return number of leaf-nodes sampled in [`Llrb`] instance.
    ///
    /// [`Llrb`]: crate::Llrb
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return minimum depth of leaf-node in [`Llrb`] instance.
    ///
    /// [`Llrb`]: crate::Llrb
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return maximum depth of leaf-node in [`Llrb`] instance.
    ///
    /// [`Llrb`]: crate::Llrb
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average depth of leaf-nodes in [`Llrb`] instance.
    ///
    /// [`Llrb`]: crate::Llrb
    pub fn mean(&self) -> usize {
        match self.samples {
            0 => 0,
            n => self.total / n,
        }
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth). Only percentiles from 90 and above are
    /// reported.
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles: Vec<(u8, usize)> = vec![];
        let (mut acc, mut prev_perc) = (0_usize, 90_u8);
        let iter = self.histogram.iter().enumerate().filter(|(_, n)| **n > 0);
        for (depth, n) in iter {
            acc += *n;
            let perc = ((acc as f64 / self.samples as f64) * 100_f64) as u8;
            if perc >= prev_perc {
                percentiles.push((perc, depth));
                prev_perc = perc;
            }
        }
        percentiles
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "depth (min, avg, max): {:?}",
            (self.min, self.mean(), self.max)
        )?;
        for (perc, depth) in self.percentiles().into_iter() {
            writeln!(f, "  {} percentile = {}", perc, depth)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_depth() {
        let mut depth = Depth::new();
        assert_eq!(depth.samples(), 0);
        assert_eq!(depth.mean(), 0);
        assert!(depth.percentiles().is_empty());

        for d in [3, 4, 4, 5, 5, 5, 6, 6, 7, 10].iter() {
            depth.sample(*d);
        }
        assert_eq!(depth.samples(), 10);
        assert_eq!(depth.min(), 3);
        assert_eq!(depth.max(), 10);
        assert_eq!(depth.mean(), 5);
        assert_eq!(depth.percentiles(), vec![(90, 7), (100, 10)]);

        let s = depth.to_string();
        assert!(s.starts_with("depth (min, avg, max): (3, 5, 10)"), "{}", s);
        assert!(s.contains("100 percentile = 10"), "{}", s);
    }
}
