//! Tree to CSV extraction

use crate::error::{ExtractError, Result};
use crate::export::{create_output_file, CsvExporter, ExtractOptions};
use crate::fields::INDEX_FIELD;
use crate::filters::{evaluate_event, EventOutcome};
use crate::source::{TreeReader, TreeSource};
use crate::types::ExtractReport;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Extract the configured tree of a ROOT file into a CSV file
///
/// A missing or unreadable input and a missing tree are reported as
/// `SourceOpen` / `TreeNotFound` before the output file is touched.
#[cfg(feature = "root")]
pub fn extract(
    input_path: &Path,
    output_path: &Path,
    options: &ExtractOptions,
) -> Result<ExtractReport> {
    let mut source = crate::source::RootSource::open(input_path)?;
    info!("Opened ROOT file {}", input_path.display());
    extract_from(&mut source, output_path, options)
}

/// Extract the configured tree of an opened source into a CSV file
pub fn extract_from<S: TreeSource>(
    source: &mut S,
    output_path: &Path,
    options: &ExtractOptions,
) -> Result<ExtractReport> {
    let tree = source.tree(&options.tree_name)?;
    check_leaves(&tree, &options.fields)?;

    let file = create_output_file(output_path)?;
    let mut report = extract_tree(&tree, BufWriter::new(file), &options.fields)?;
    report.csv_path = Some(output_path.to_path_buf());

    info!(
        "Wrote {} of {} events to {} ({} rejected, acceptance {:.3})",
        report.written_rows,
        report.total_events,
        output_path.display(),
        report.rejected_events,
        report.acceptance()
    );
    Ok(report)
}

/// Write the header and one row per accepted event of `tree` to `sink`
pub fn extract_tree<T, W, S>(tree: &T, sink: W, fields: &[S]) -> Result<ExtractReport>
where
    T: TreeReader + ?Sized,
    W: Write,
    S: AsRef<str>,
{
    check_leaves(tree, fields)?;

    let mut leaves: Vec<&str> = vec![INDEX_FIELD];
    for field in fields {
        let field = field.as_ref();
        if !leaves.contains(&field) {
            leaves.push(field);
        }
    }

    let mut exporter = CsvExporter::new(sink, fields)?;
    let mut report = ExtractReport::default();

    tree.for_each_event(&leaves, &mut |event| {
        match evaluate_event(event, fields)? {
            EventOutcome::Accepted(values) => {
                exporter.write_row(&values)?;
                report.written_rows += 1;
            }
            EventOutcome::Rejected { field, index } => {
                debug!(
                    "Evt: {} dropped, {}[{}] is NaN",
                    event.entry, field, index
                );
                report.rejected_events += 1;
            }
        }
        report.total_events += 1;
        Ok(())
    })?;

    exporter.finish()?;
    Ok(report)
}

/// Fail with `MissingLeaf` unless the index leaf and every field exist
fn check_leaves<T, S>(tree: &T, fields: &[S]) -> Result<()>
where
    T: TreeReader + ?Sized,
    S: AsRef<str>,
{
    let names = std::iter::once(INDEX_FIELD).chain(fields.iter().map(|f| f.as_ref()));
    for name in names {
        if !tree.has_leaf(name) {
            return Err(ExtractError::MissingLeaf(name.to_string()));
        }
    }
    Ok(())
}
