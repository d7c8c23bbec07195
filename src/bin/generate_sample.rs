use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Write a synthetic employee table for trying out the dashboard.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", about)]
struct Args {
    /// Output file (.csv or .parquet).
    #[arg(default_value = "hr_data.csv")]
    output: PathBuf,

    /// Number of employees to generate.
    #[arg(long, default_value_t = 250)]
    rows: usize,

    /// PRNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Debug, Serialize)]
struct Row {
    department: String,
    county: String,
    job_title: String,
    salary: f64,
    years_of_experience: f64,
    gender: String,
}

/// (department, base salary, job titles)
const DEPARTMENTS: [(&str, f64, &[&str]); 5] = [
    ("Engineering", 62_000.0, &["Software Engineer", "QA Engineer", "Engineering Manager"]),
    ("Finance", 55_000.0, &["Accountant", "Financial Analyst"]),
    ("Human Resources", 45_000.0, &["HR Advisor", "Recruiter"]),
    ("Marketing", 48_000.0, &["Marketing Specialist", "Content Writer"]),
    ("Sales", 42_000.0, &["Sales Representative", "Account Manager"]),
];

const COUNTIES: [&str; 6] = ["Cork", "Dublin", "Galway", "Kerry", "Limerick", "Mayo"];
const GENDERS: [&str; 2] = ["Female", "Male"];

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
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = (self.next_f64() * items.len() as f64) as usize;
        &items[idx.min(items.len() - 1)]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn generate_rows(n: usize, rng: &mut SimpleRng) -> Vec<Row> {
    (0..n)
        .map(|_| {
            let (department, base, titles) = *rng.pick(&DEPARTMENTS);
            let job_title = *rng.pick(titles);
            let years = (rng.next_f64() * 30.0).floor();
            let senior = if job_title.ends_with("Manager") { 12_000.0 } else { 0.0 };
            let salary = (base + senior + years * 1_400.0 + rng.gauss(0.0, 4_000.0))
                .max(20_000.0)
                .round();

            Row {
                department: department.to_string(),
                county: rng.pick(&COUNTIES).to_string(),
                job_title: job_title.to_string(),
                salary,
                years_of_experience: years,
                gender: rng.pick(&GENDERS).to_string(),
            }
        })
        .collect()
}

fn write_csv(path: &Path, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[Row]) -> Result<()> {
    let strings = |f: fn(&Row) -> &str| -> ArrayRef {
        Arc::new(StringArray::from(rows.iter().map(f).collect::<Vec<_>>()))
    };
    let floats = |f: fn(&Row) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from(rows.iter().map(f).collect::<Vec<_>>()))
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("department", DataType::Utf8, false),
        Field::new("county", DataType::Utf8, false),
        Field::new("job_title", DataType::Utf8, false),
        Field::new("salary", DataType::Float64, false),
        Field::new("years_of_experience", DataType::Float64, false),
        Field::new("gender", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            strings(|r| r.department.as_str()),
            strings(|r| r.county.as_str()),
            strings(|r| r.job_title.as_str()),
            floats(|r| r.salary),
            floats(|r| r.years_of_experience),
            strings(|r| r.gender.as_str()),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);
    let rows = generate_rows(args.rows, &mut rng);

    let ext = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => write_csv(&args.output, &rows)?,
        "parquet" | "pq" => write_parquet(&args.output, &rows)?,
        other => bail!("Unsupported output extension: .{other}"),
    }

    println!("Wrote {} employees to {}", rows.len(), args.output.display());
    Ok(())
}
