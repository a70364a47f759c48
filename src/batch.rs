use crate::consts::ANSWER_COUNT;
use crate::error::{DfResult, DiscForgeError};
use crate::scorer::{Answer, DiscResult, ScoringEngine};
use rayon::prelude::*;
use std::io::{Read, Write};
use tracing::debug;

/// One answer sheet read from a batch file, cells kept raw until scoring.
#[derive(Debug, Clone)]
pub struct SheetRecord {
    pub id: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub id: String,
    pub result: Result<DiscResult, String>,
}

/// Reads headerless CSV rows of 48 answer cells, optionally preceded by an id
/// cell. Blank rows and `#` comments are skipped; rows without an id are
/// numbered from 1.
///
/// A leading cell is only taken as an id when it is not itself an answer, so
/// a 49-answer row keeps every cell and is rejected by [`parse_cells`].
pub fn read_sheets<R: Read>(reader: R) -> DfResult<Vec<SheetRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut sheets = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        let has_id = cells.len() == ANSWER_COUNT + 1 && cells[0].parse::<Answer>().is_err();
        let id = if has_id {
            cells.remove(0)
        } else {
            (sheets.len() + 1).to_string()
        };
        sheets.push(SheetRecord { id, cells });
    }
    debug!("Read {} answer sheets", sheets.len());
    Ok(sheets)
}

/// Parses a sheet's cells as answers, enforcing the sheet length first.
pub fn parse_cells(cells: &[String]) -> DfResult<Vec<Answer>> {
    if cells.len() != ANSWER_COUNT {
        return Err(DiscForgeError::InvalidAnswerCount {
            expected: ANSWER_COUNT,
            actual: cells.len(),
        });
    }
    cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            cell.parse::<Answer>()
                .map_err(|reason| DiscForgeError::InvalidAnswerElement { index, reason })
        })
        .collect()
}

/// Scores every sheet in parallel. Output order matches input order and a bad
/// sheet only fails its own row.
pub fn score_sheets(engine: &ScoringEngine, sheets: &[SheetRecord]) -> Vec<BatchOutcome> {
    sheets
        .par_iter()
        .map(|sheet| BatchOutcome {
            id: sheet.id.clone(),
            result: parse_cells(&sheet.cells)
                .and_then(|answers| engine.compute_disc(&answers))
                .map_err(|e| e.to_string()),
        })
        .collect()
}

/// One CSV row per outcome: id, code, natural D/I/S/C, response D/I/S/C, error.
pub fn write_outcomes<W: Write>(writer: W, outcomes: &[BatchOutcome]) -> DfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "id",
        "profile_code",
        "natural_d",
        "natural_i",
        "natural_s",
        "natural_c",
        "response_d",
        "response_i",
        "response_s",
        "response_c",
        "error",
    ])?;

    for outcome in outcomes {
        let mut row = vec![outcome.id.clone()];
        match &outcome.result {
            Ok(result) => {
                row.push(result.profile_code.clone());
                for (_, v) in result.percentages.natural.iter() {
                    row.push(v.to_string());
                }
                for (_, v) in result.percentages.response.iter() {
                    row.push(v.to_string());
                }
                row.push(String::new());
            }
            Err(e) => {
                row.extend(std::iter::repeat(String::new()).take(9));
                row.push(e.clone());
            }
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}
