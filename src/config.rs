use crate::{Error, Grid, Result};
use std::time::Duration;

/// Board parameters fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Side length of the square field.
    pub size: usize,
    /// Pause between two scheduled generations.
    pub step_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            step_delay: Self::STEP_DELAY,
        }
    }
}

impl Config {
    pub const DEFAULT_SIZE: usize = 20;
    pub const LARGE_SIZE: usize = 35;
    pub const STEP_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(size: usize, step_delay: Duration) -> Result<Self> {
        let config = Self { size, step_delay };
        config.validate()?;
        Ok(config)
    }

    /// Rejects sizes without a representable field (see [`Grid::MAX_SIZE`]) and a zero delay.
    pub fn validate(&self) -> Result<()> {
        Grid::cell_count(self.size)?;
        if self.step_delay.is_zero() {
            return Err(Error::ZeroDelay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::{Error, Grid};
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.size, 20);
        assert_eq!(config.step_delay, Duration::from_secs(1));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_degenerate_values() {
        assert_eq!(
            Config::new(0, Config::STEP_DELAY),
            Err(Error::EmptyGrid)
        );
        assert_eq!(
            Config::new(Config::LARGE_SIZE, Duration::ZERO),
            Err(Error::ZeroDelay)
        );
        assert!(Config::new(Config::LARGE_SIZE, Duration::from_millis(10)).is_ok());
    }

    #[test]
    fn test_rejects_oversized_boards() {
        let max = Grid::MAX_SIZE;
        assert!(Config::new(max, Config::STEP_DELAY).is_ok());
        assert_eq!(
            Config::new(max + 1, Config::STEP_DELAY),
            Err(Error::TooLarge { size: max + 1, max })
        );
        let huge = usize::MAX / 2;
        assert_eq!(
            Config::new(huge, Config::STEP_DELAY),
            Err(Error::TooLarge { size: huge, max })
        );
    }
}
