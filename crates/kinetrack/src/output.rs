//! CSV rendering of frame rows.

use kinetrack_core::{FrameTable, Timeline, aggregate::COLUMNS};
use std::io;

/// Write the header and every row of `table`, returning the number of rows.
///
/// The header is written even when there are no rows.
pub fn write_rows<W: io::Write>(
    writer: W,
    table: &FrameTable,
    timeline: &Timeline,
) -> Result<usize, csv::Error> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    out.write_record(COLUMNS)?;

    let mut count = 0usize;
    for row in table.rows(timeline) {
        out.serialize(row)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetrack_core::{Pipeline, SmootherParams};
    use kinetrack_log::{Document, RawSample, RawTrack, TrackerId};

    fn track(id: TrackerId, points: &[(f64, f64, i64)]) -> RawTrack {
        RawTrack::new(
            id,
            points
                .iter()
                .map(|&(x, y, frame)| RawSample::new(x, y, frame))
                .collect(),
        )
    }

    // No smoothing, so expected values stay exact.
    fn unsmoothed(document: Document) -> FrameTable {
        Pipeline::new(SmootherParams {
            sigma: 0.0,
            ..SmootherParams::default()
        })
        .run(document)
    }

    fn render(table: &FrameTable, timeline: &Timeline) -> String {
        let mut out = Vec::new();
        write_rows(&mut out, table, timeline).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_table_still_has_header() {
        let table = FrameTable::new(5);
        let rendered = render(&table, &Timeline::new(5, 0.0, 1.0));
        assert_eq!(
            rendered,
            "frame,timestamp,x,y,xVel,yVel,velMag,xAcc,yAcc,accMag,curvature,trackerId,trackerIndex\n"
        );
    }

    #[test]
    fn rows_render_with_decimal_floats() {
        let table = unsmoothed(Document::new(
            10,
            vec![track(
                TrackerId::from("A"),
                &[(0.0, 300.0, 0), (10.0, 300.0, 5)],
            )],
        ));
        let rendered = render(&table, &Timeline::new(10, 100.0, 10.0));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "0,100.0,0.0,0.0,2.0,0.0,2.0,0.0,0.0,0.0,0.0,A,0");
        assert_eq!(lines[2], "5,105.0,10.0,0.0,2.0,0.0,2.0,10.0,0.0,10.0,0.0,A,0");
    }

    #[test]
    fn string_ids_with_commas_are_quoted() {
        let table = unsmoothed(Document::new(
            3,
            vec![
                track(TrackerId::Int(12), &[(1.0, 300.0, 1)]),
                track(TrackerId::from("a,b"), &[(2.0, 300.0, 1)]),
            ],
        ));
        let rendered = render(&table, &Timeline::new(3, 0.0, 3.0));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "1,1.0,1.0,0.0,1.0,0.0,1.0,1.0,0.0,1.0,0.0,12,0");
        assert_eq!(lines[2], "1,1.0,2.0,0.0,2.0,0.0,2.0,2.0,0.0,2.0,0.0,\"a,b\",1");
    }

    #[test]
    fn row_count_is_returned() {
        let table = unsmoothed(Document::new(
            3,
            vec![track(TrackerId::Int(1), &[(0.0, 0.0, 2), (0.0, 0.0, 2)])],
        ));
        let mut out = Vec::new();
        let written = write_rows(&mut out, &table, &Timeline::new(3, 0.0, 1.0)).unwrap();
        assert_eq!(written, 2);
    }
}
