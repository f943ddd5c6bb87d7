use std::path::PathBuf;

use anyhow::{Context, Result};

use population_dashboard::PopulationRecord;

/// (name, code, population in the first year, mean annual growth)
const COUNTRIES: &[(&str, &str, f64, f64)] = &[
    ("Argentina", "ARG", 20_481_779.0, 0.0140),
    ("Australia", "AUS", 10_276_477.0, 0.0150),
    ("Brazil", "BRA", 72_179_226.0, 0.0185),
    ("Canada", "CAN", 17_909_009.0, 0.0120),
    ("China", "CHN", 667_070_000.0, 0.0125),
    ("Egypt, Arab Rep.", "EGY", 26_632_893.0, 0.0215),
    ("France", "FRA", 46_621_669.0, 0.0055),
    ("Germany", "DEU", 72_814_900.0, 0.0020),
    ("India", "IND", 445_954_579.0, 0.0185),
    ("Indonesia", "IDN", 88_296_070.0, 0.0175),
    ("Japan", "JPN", 93_216_000.0, 0.0045),
    ("Mexico", "MEX", 37_771_861.0, 0.0205),
    ("Nigeria", "NGA", 45_138_458.0, 0.0260),
    ("Pakistan", "PAK", 44_988_690.0, 0.0255),
    ("United Kingdom", "GBR", 52_400_000.0, 0.0040),
    ("United States", "USA", 180_671_000.0, 0.0100),
];

const FIRST_YEAR: i32 = 1960;
const LAST_YEAR: i32 = 2022;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[-spread, spread)`
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let mut rows = 0usize;
    for &(name, code, base, growth) in COUNTRIES {
        let mut population = base;
        for year in FIRST_YEAR..=LAST_YEAR {
            writer
                .serialize(PopulationRecord::new(name, code, year, population.round() as i64))
                .context("writing CSV row")?;
            rows += 1;
            population *= 1.0 + growth + rng.jitter(0.004);
        }
    }
    writer.flush().context("flushing CSV output")?;

    println!(
        "Wrote {rows} rows ({} countries, {FIRST_YEAR}-{LAST_YEAR}) to {}",
        COUNTRIES.len(),
        output_path.display()
    );
    Ok(())
}
