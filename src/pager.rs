//! Paging through raw trip rows.

use std::io::{BufRead, Write};
use std::ops::Range;

use crate::error::ExplorerResult;
use crate::prompt::Prompter;
use crate::selection::{Answer, parse_yes_no};
use crate::types::TripTable;

/// Walks a table `page_size` rows at a time. Each pager starts at row 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    offset: usize,
}

impl Pager {
    /// A pager showing `page_size` rows per page; zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            offset: 0,
        }
    }

    /// Index of the first row the next page will show.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Next page of row indices for a table of `len` rows, or `None` once exhausted.
    pub fn next_page(&mut self, len: usize) -> Option<Range<usize>> {
        if self.offset >= len {
            return None;
        }
        let page = self.offset..(self.offset + self.page_size).min(len);
        self.offset += self.page_size;
        Some(page)
    }
}

/// Render the rows in `range` as aligned text, headed by the column names.
///
/// The first column is the row's position in the table.
pub fn render_page(table: &TripTable, range: Range<usize>) -> String {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(range.len() + 1);
    grid.push(
        std::iter::once(String::new())
            .chain(table.schema.field_names().map(str::to_owned))
            .collect(),
    );
    for (idx, row) in table.rows.iter().enumerate().skip(range.start).take(range.len()) {
        grid.push(
            std::iter::once(idx.to_string())
                .chain(row.iter().map(|v| v.to_string()))
                .collect(),
        );
    }

    let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            grid.iter()
                .filter_map(|r| r.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in &grid {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Offer to show the table page by page.
///
/// Anything but "yes" to the first question ends immediately; the follow-up question is
/// repeated until it gets "yes" or "no".
pub fn browse<R: BufRead, W: Write>(
    table: &TripTable,
    page_size: usize,
    prompter: &mut Prompter<R, W>,
) -> ExplorerResult<()> {
    let opt_in = prompter.ask(&format!(
        "\nWould you like to view {page_size} rows of individual trip data? Enter yes or no: "
    ))?;

    if opt_in.as_deref() == Some("yes") {
        let mut pager = Pager::new(page_size);
        loop {
            let Some(page) = pager.next_page(table.row_count()) else {
                prompter.say("No more rows to display.")?;
                break;
            };
            write!(prompter.output(), "{}", render_page(table, page))?;

            match prompter.ask_until("Do you wish to continue? Enter yes or no: ", parse_yes_no)? {
                Some(Answer::Yes) => continue,
                Some(Answer::No) | None => break,
            }
        }
    }

    prompter.say("Thank you for using the data viewer!")
}
