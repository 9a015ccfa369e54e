//! Quick start for seq-rail.
//!
//! Run with: `cargo run --example quick_start`

use seq_rail::prelude::*;

#[allow(dead_code)]
#[derive(Debug)]
enum AppError {
    Sequence(SequenceError),
    BadRecord(&'static str),
}

impl From<SequenceError> for AppError {
    fn from(err: SequenceError) -> Self {
        AppError::Sequence(err)
    }
}

fn parse(raw: &&'static str) -> Result<i64, AppError> {
    raw.trim().parse().map_err(|_| AppError::BadRecord(*raw))
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Infinite sources stay lazy until a consumer pulls
    println!("\n1. Squares of odd numbers:");
    let squares = increment::<AppError>()
        .filter(|n| n % 2 == 1)
        .map(|n| Ok(n * n))
        .take(5)
        .collect();
    println!("{:?}", squares);

    // 2. The first error stops the pipeline
    println!("\n2. Parsing records:");
    let records = ["10", " 20", "x", "40"];
    let parsed = from_slice(&records).map(parse).collect();
    match parsed {
        Ok(values) => println!("Parsed: {:?}", values),
        Err(e) => println!("Error: {:?}", e),
    }

    // 3. Fold keeps what it had before the failure
    println!("\n3. Partial sums:");
    match from_slice(&records).map(parse).fold(0i64, |acc, v| acc + v) {
        Ok(sum) => println!("Sum: {}", sum),
        Err(interrupted) => {
            println!("Stopped at {} with error {:?}", interrupted.partial, interrupted.error)
        }
    }

    // 4. Structural errors from the engine itself
    println!("\n4. Zipping mismatched lists:");
    let names = ["ann", "bo", "cy"];
    let scores = [91, 78];
    let zipped = zip_eq::<_, _, AppError>(&names, &scores)
        .map(|t| Ok(format!("{}={}", t.a, t.b)))
        .join(", ");
    println!("{:?}", zipped);

    // 5. Bridging back into std iterators
    println!("\n5. As std::iter results:");
    for item in range::<AppError>(0, 3).into_results() {
        println!("- {:?}", item);
    }
}
