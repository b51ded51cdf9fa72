//! Writes `programs_info.csv` and `programs_info.parquet` with made-up
//! program costs, including the messy cost formats the loader must cope with.

use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::StringArray;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

struct Row {
    university: String,
    faculty: String,
    program_name: String,
    program_type: String,
    cost: String,
}

const UNIVERSITIES: [(&str, u64); 5] = [
    ("จุฬาลงกรณ์มหาวิทยาลัย", 25_000),
    ("มหาวิทยาลัยเกษตรศาสตร์", 19_000),
    ("มหาวิทยาลัยเชียงใหม่", 16_000),
    ("มหาวิทยาลัยขอนแก่น", 15_000),
    ("มหาวิทยาลัยมหิดล", 30_000),
];

const PROGRAMS: [(&str, &str, u64); 8] = [
    ("วิศวกรรมศาสตร์", "Computer Engineering", 6_000),
    ("วิศวกรรมศาสตร์", "Civil Engineering", 4_000),
    ("วิทยาศาสตร์", "Physics", 0),
    ("วิทยาศาสตร์", "Data Science", 8_000),
    ("บริหารธุรกิจ", "Business Administration", 5_000),
    ("อักษรศาสตร์", "Thai Language", 0),
    ("แพทยศาสตร์", "Medicine", 40_000),
    ("สถาปัตยกรรมศาสตร์", "Architecture", 7_000),
];

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A cost in one of the formats seen in hand-maintained sheets.
fn messy_cost(rng: &mut SimpleRng, amount: u64) -> String {
    match rng.below(10) {
        0..=3 => format!("{} บาท", group_thousands(amount)),
        4..=5 => group_thousands(amount),
        6 => format!("  {amount}  "),
        7 => format!("{amount}บาท"),
        8 => "N/A".to_string(),
        _ => "ติดต่อคณะ".to_string(),
    }
}

fn generate_rows(rng: &mut SimpleRng) -> Vec<Row> {
    let mut rows = Vec::new();
    for (university, base) in UNIVERSITIES {
        for (faculty, program, premium) in PROGRAMS {
            for program_type in ["ภาคปกติ", "นานาชาติ"] {
                // not every university offers every track
                if rng.below(4) == 0 {
                    continue;
                }
                let multiplier = if program_type == "นานาชาติ" { 3 } else { 1 };
                let jitter = rng.below(40) as u64 * 250;
                let amount = (base + premium) * multiplier + jitter;
                rows.push(Row {
                    university: university.to_string(),
                    faculty: faculty.to_string(),
                    program_name: format!("{program} ({program_type})"),
                    program_type: program_type.to_string(),
                    cost: messy_cost(rng, amount),
                });
            }
        }
    }
    rows
}

fn write_csv(path: &str, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record(["university", "faculty", "program_name", "program_type", "cost"])?;
    for r in rows {
        writer.write_record([
            &r.university,
            &r.faculty,
            &r.program_name,
            &r.program_type,
            &r.cost,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &str, rows: &[Row]) -> Result<()> {
    let column = |f: fn(&Row) -> &str| -> StringArray { rows.iter().map(|r| Some(f(r))).collect() };

    let schema = Arc::new(Schema::new(vec![
        Field::new("university", DataType::Utf8, true),
        Field::new("faculty", DataType::Utf8, true),
        Field::new("program_name", DataType::Utf8, false),
        Field::new("program_type", DataType::Utf8, true),
        Field::new("cost", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(column(|r| r.university.as_str())),
            Arc::new(column(|r| r.faculty.as_str())),
            Arc::new(column(|r| r.program_name.as_str())),
            Arc::new(column(|r| r.program_type.as_str())),
            Arc::new(column(|r| r.cost.as_str())),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng);

    write_csv("programs_info.csv", &rows)?;
    write_parquet("programs_info.parquet", &rows)?;

    println!(
        "Wrote {} programs to programs_info.csv and programs_info.parquet",
        rows.len()
    );
    Ok(())
}
