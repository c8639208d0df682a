// src/bin/processor.rs
//! Interactive menu front end over the densemat public API. Reads
//! matrices from stdin through the text codec and prints either the
//! result's text form or the error message, never partial output.

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use densemat::{Matrix, MatrixError, Transposition};

const RESULT_HEADER: &str = "The result is:";

const MENU: &str = "0. exit\n\
                    1. add matrices\n\
                    2. multiply matrix by constant\n\
                    3. multiply matrices\n\
                    4. transpose matrix\n\
                    5. calculate determinant\n\
                    6. inverse matrix";

const TRANSPOSE_MENU: &str = "1. Main diagonal\n\
                              2. Side diagonal\n\
                              3. Vertical line\n\
                              4. Horizontal line\n\
                              0. Exit";

type Lines<'a> = std::io::Lines<io::StdinLock<'a>>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("Available options:\n{}", MENU);
        let Some(choice) = read_line(&mut lines)? else {
            break;
        };
        match choice.trim() {
            "0" => break,
            "1" => {
                let a = read_matrix(&mut lines)?;
                let b = read_matrix(&mut lines)?;
                print_outcome(a.add(&b));
            }
            "2" => {
                let a = read_matrix(&mut lines)?;
                println!("Enter constant:");
                let constant: f64 = read_required(&mut lines)?
                    .trim()
                    .parse()
                    .context("constant must be a number")?;
                print_outcome(Ok(a.scale(constant)));
            }
            "3" => {
                let a = read_matrix(&mut lines)?;
                let b = read_matrix(&mut lines)?;
                print_outcome(a.multiply(&b));
            }
            "4" => {
                println!("{}", TRANSPOSE_MENU);
                let pick: usize = read_required(&mut lines)?
                    .trim()
                    .parse()
                    .context("transposition choice must be a number")?;
                match transposition_for(pick) {
                    Some(transposition) => {
                        let a = read_matrix(&mut lines)?;
                        print_outcome(a.transpose_by(transposition));
                    }
                    None if pick == 0 => {}
                    None => println!("Unknown option: {}", pick),
                }
            }
            "5" => {
                let a = read_matrix(&mut lines)?;
                println!("{}", a.determinant());
            }
            "6" => {
                let a = read_matrix(&mut lines)?;
                match a.inverse() {
                    Ok(inverse) => println!("{}", inverse.to_text(Some(3))),
                    Err(_) => println!("This matrix doesn't have an inverse."),
                }
            }
            other => println!("Unknown option: {}", other),
        }
    }
    Ok(())
}

/// Menu pick 1..=4 to reflection; anything else has no transposition.
fn transposition_for(pick: usize) -> Option<Transposition> {
    (1..=4).contains(&pick).then(|| Transposition::ALL[pick - 1])
}

fn print_outcome(result: Result<Matrix, MatrixError>) {
    println!("{}", RESULT_HEADER);
    match result {
        Ok(matrix) => print!("{}", matrix),
        Err(error) => println!("ERROR: {}", error),
    }
}

fn read_line(lines: &mut Lines) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read stdin")?)),
        None => Ok(None),
    }
}

fn read_required(lines: &mut Lines) -> Result<String> {
    match read_line(lines)? {
        Some(line) => Ok(line),
        None => bail!("unexpected end of input"),
    }
}

fn read_matrix(lines: &mut Lines) -> Result<Matrix> {
    println!("Enter size of matrix (rows columns):");
    let header = read_required(lines)?;
    let mut parts = header.split_whitespace();
    let rows: usize = parts
        .next()
        .context("missing row count")?
        .parse()
        .context("row count must be a number")?;
    let columns: usize = parts
        .next()
        .context("missing column count")?
        .parse()
        .context("column count must be a number")?;

    println!("Enter the matrix, one row per line:");
    let mut buffer = String::new();
    for _ in 0..rows {
        buffer.push_str(&read_required(lines)?);
        buffer.push('\n');
    }
    let matrix = Matrix::parse(&buffer)?;
    if matrix.width() != columns || matrix.height() != rows {
        bail!(
            "expected a {}x{} matrix but read {}",
            columns,
            rows,
            matrix.dimension()
        );
    }
    Ok(matrix)
}
