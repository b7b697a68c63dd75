//! Write `sample_catalog.csv`: a deterministic, deliberately messy mobile
//! phone catalog for driving the pipeline by hand. Free-text cells contain
//! commas (and get quoted), numeric cells go missing now and then, and a few
//! rows arrive short.

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (brand, model stem, typical actual price in USD)
    let brands: [(&str, &str, f64); 10] = [
        ("APPLE", "iPhone", 950.0),
        ("SAMSUNG", "Galaxy", 780.0),
        ("GOOGLE", "Pixel", 720.0),
        ("XIAOMI", "Redmi", 280.0),
        ("HONOR", "Magic", 450.0),
        ("CMF", "Phone", 230.0),
        ("LAVA", "Blaze", 140.0),
        ("ITEL", "Aura", 90.0),
        ("KARBONN", "Titanium", 85.0),
        ("VOX", "V", 70.0),
    ];

    let descriptions = [
        "Slim design, all-day battery, fast charging",
        "Bright AMOLED display, stereo speakers",
        "Flagship camera, telephoto zoom, night mode",
        "Great, value phone for everyday use",
        "Rugged build, dual SIM, expandable storage",
        "Compact, light, easy one-handed use",
    ];

    let rams = [4i64, 6, 8, 12, 16];
    let storages = [32i64, 64, 128, 256, 512];

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path("sample_catalog.csv")
        .expect("Failed to create sample_catalog.csv");

    writer
        .write_record([
            "Brand",
            "Camera",
            "Description",
            "Link",
            "Product Name",
            "Actual price (USD)",
            "Discount price (USD)",
            "Display Size (inch)",
            "Ram (Gb)",
            "Ratings",
            "Reviews",
            "Stars",
            "Storage (GB)",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for (brand, stem, base_price) in brands {
        let models = 4 + (rng.next_u64() % 5) as usize;
        for model_no in 0..models {
            let name = format!("{stem} {}", 10 + model_no * 2);
            let camera = format!(
                "{}MP + {}MP",
                8 * (1 + rng.next_u64() % 8),
                2 * (1 + rng.next_u64() % 6)
            );
            let description = *rng.pick(&descriptions);
            let link = format!(
                "https://example.com/{}/{}",
                brand.to_ascii_lowercase(),
                name.to_ascii_lowercase().replace(' ', "-")
            );

            let actual = rng.gauss(base_price, base_price * 0.15).max(40.0);
            let discount = actual * (0.6 + 0.35 * rng.next_f64());
            let display = 5.0 + 2.0 * rng.next_f64();
            let ratings = (rng.gauss(2000.0, 900.0).max(0.0)) as i64;
            let reviews = ratings / (2 + (rng.next_u64() % 8) as i64);

            // Stars: mostly 1.0–5.0, sometimes zero, sometimes absent.
            let stars = if rng.chance(0.06) {
                String::new()
            } else if rng.chance(0.04) {
                "0".to_string()
            } else {
                format!("{:.1}", 1.0 + 4.0 * rng.next_f64())
            };

            // A blank cell here and there keeps the parser honest.
            let discount_cell = if rng.chance(0.05) {
                String::new()
            } else {
                format!("{discount:.2}")
            };

            let row = [
                brand.to_string(),
                camera,
                description.to_string(),
                link,
                name,
                format!("{actual:.2}"),
                discount_cell,
                format!("{display:.1}"),
                rng.pick(&rams).to_string(),
                ratings.to_string(),
                reviews.to_string(),
                stars,
                rng.pick(&storages).to_string(),
            ];

            // Every so often the feed truncates a row mid-way.
            if rng.chance(0.04) {
                writer
                    .write_record(&row[..6])
                    .expect("Failed to write short row");
            } else {
                writer.write_record(&row).expect("Failed to write row");
            }
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush sample_catalog.csv");
    println!("Wrote {rows} listings to sample_catalog.csv");
}
