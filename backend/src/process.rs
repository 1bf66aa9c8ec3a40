use std::collections::HashSet;

use fed_core::handler::{dispatch, MetadataHandler};
use fed_core::request::MetadataRequest;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::ProcessError;
use crate::inspect::Summary;

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessOptions {
    pub dedup: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub ok: usize,
    pub failed: usize,
    pub duplicates: usize,
}

/// Checks newline-delimited request records, writing one summary line per
/// non-blank input line. A bad record never stops the run.
pub async fn process<R, W, H>(
    mut reader: R,
    writer: &mut W,
    handler: &H,
    options: ProcessOptions,
) -> Result<Stats, ProcessError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    H: MetadataHandler<Response = Summary> + ?Sized,
{
    let mut line = Vec::new();
    let mut seen = HashSet::new();
    let mut stats = Stats::default();
    let mut line_no = 0;

    loop {
        line.clear();
        // undecodable bytes fail only their own line
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        line_no += 1;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        stats.total += 1;

        let summary = match process_line(&line, line_no, handler, &mut seen, options).await {
            Ok(summary) => {
                if summary.duplicate {
                    stats.duplicates += 1;
                } else {
                    stats.ok += 1;
                }
                summary
            }
            Err(e) => {
                log::warn!(target: "process", "line {}: {}", line_no, e);
                stats.failed += 1;
                Summary::failed(line_no, &e)
            }
        };

        let mut buf = serde_json::to_vec(&summary)?;
        buf.push(b'\n');
        writer.write_all(&buf).await?;
    }
    writer.flush().await?;

    log::info!(
        target: "process",
        "checked {} requests: {} ok, {} failed, {} duplicates",
        stats.total,
        stats.ok,
        stats.failed,
        stats.duplicates
    );
    Ok(stats)
}

async fn process_line<H>(
    line: &[u8],
    line_no: usize,
    handler: &H,
    seen: &mut HashSet<MetadataRequest>,
    options: ProcessOptions,
) -> Result<Summary, ProcessError>
where
    H: MetadataHandler<Response = Summary> + ?Sized,
{
    let request = MetadataRequest::from_json(std::str::from_utf8(line)?)?;
    if options.dedup && seen.contains(&request) {
        log::debug!(target: "process", "line {}: duplicate {}", line_no, request);
        return Ok(Summary::duplicate(line_no, &request));
    }

    let mut summary = dispatch(handler, &request)
        .await
        .map_err(ProcessError::Handler)?;
    summary.line = line_no;

    if options.dedup {
        seen.insert(request);
    }
    Ok(summary)
}
