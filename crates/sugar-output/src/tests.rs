//! Integration tests for sugar-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, STEP_SUMMARIES_FILE};
    use crate::row::StepSummaryRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn summary_row(tick: u64) -> StepSummaryRow {
        StepSummaryRow {
            tick,
            population:   25,
            deaths:       tick,
            births:       tick,
            total_wealth: -3,
            total_stock:  400 + tick,
        }
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(STEP_SUMMARIES_FILE).exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(STEP_SUMMARIES_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(STEP_SUMMARIES_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "population", "deaths", "births", "total_wealth", "total_stock"]);
    }

    #[test]
    fn csv_step_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step_summary(&summary_row(3)).unwrap();
        w.write_step_summary(&summary_row(4)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(STEP_SUMMARIES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "3");    // tick
        assert_eq!(&rows[0][1], "25");   // population
        assert_eq!(&rows[0][4], "-3");   // total_wealth
        assert_eq!(&rows[1][5], "404");  // total_stock
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use sugar_core::SugarscapeConfig;
    use sugar_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, STEP_SUMMARIES_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::StepSummaryRow;
    use crate::writer::OutputWriter;
    use crate::OutputResult;

    #[test]
    fn one_row_per_step() {
        let config = SugarscapeConfig { seed: Some(1), ..SugarscapeConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();

        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run_steps(5, &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join(STEP_SUMMARIES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        let ticks: Vec<&str> = rows.iter().map(|r| r.get(0).unwrap()).collect();
        assert_eq!(ticks, ["1", "2", "3", "4", "5"]);
        assert!(rows.iter().all(|r| &r[1] == "25"));
        assert!(rows.iter().all(|r| r[2] == r[3]), "births balance deaths");
    }

    /// Keeps rows in memory so a test can inspect them after the run.
    #[derive(Default)]
    struct Recording {
        rows:     Vec<StepSummaryRow>,
        flushes:  usize,
        finished: usize,
    }

    impl OutputWriter for Recording {
        fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
            self.rows.push(*row);
            Ok(())
        }

        fn flush(&mut self) -> OutputResult<()> {
            self.flushes += 1;
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn writer_sees_every_summary_then_finish() {
        let config = SugarscapeConfig { seed: Some(3), ..SugarscapeConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut obs = SimOutputObserver::new(Recording::default());
        sim.run_steps(4, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        let ticks: Vec<u64> = writer.rows.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, [1, 2, 3, 4]);
        assert_eq!(writer.flushes, 4);
        assert_eq!(writer.finished, 1);
        assert_eq!(writer.rows[3], StepSummaryRow::from(&sim.summary()));
    }

    #[test]
    fn rows_are_visible_before_the_run_ends() {
        use sugar_sim::SimObserver;

        let config = SugarscapeConfig { seed: Some(2), ..SugarscapeConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());

        sim.step().unwrap();
        obs.on_step_end(&sim.summary());

        let mut rdr = csv::Reader::from_path(dir.path().join(STEP_SUMMARIES_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }
}

#[cfg(test)]
mod frame_tests {
    use sugar_core::{Coord, SugarscapeConfig, UniformRange};
    use sugar_sim::{SimBuilder, Simulation};

    use crate::frame::{render_frame, write_frame};

    fn blank(width: u32, height: u32) -> Simulation {
        let config = SugarscapeConfig {
            width,
            height,
            agent_count: 1,
            vision_range: UniformRange::new(1, 1),
            seed: Some(0),
            ..SugarscapeConfig::default()
        };
        SimBuilder::new(config).seed_resources(false).populate(false).build().unwrap()
    }

    #[test]
    fn empty_grid_frame() {
        let sim = blank(3, 2);
        assert_eq!(render_frame(&sim), "   |   |   \n   |   |   \n------------");
    }

    #[test]
    fn agents_show_padded_ids() {
        let mut sim = blank(3, 2);
        sim.insert_agent(5, 1, 1, 10, Coord::new(1, 0)).unwrap();
        sim.insert_agent(5, 1, 1, 10, Coord::new(2, 1)).unwrap();
        assert_eq!(render_frame(&sim), "   |001|   \n   |   |002\n------------");
    }

    #[test]
    fn rule_is_four_dashes_per_column() {
        let sim = blank(35, 35);
        let frame = render_frame(&sim);
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines.len(), 36);
        assert_eq!(lines[35], "-".repeat(140));
        assert!(lines[..35].iter().all(|l| l.len() == 35 * 4 - 1));
    }

    #[test]
    fn write_frame_appends_newline() {
        let sim = blank(2, 1);
        let mut buf = Vec::new();
        write_frame(&mut buf, &sim).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "   |   \n--------\n");
    }
}
