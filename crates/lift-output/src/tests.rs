//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{CallRow, LiftEventRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created_in_new_dir() {
        let dir = tmp();
        let out = dir.path().join("nested/out");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join("lift_events.csv").exists());
        assert!(out.join("call_log.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("lift_events.csv")),
            ["tick", "lift", "event", "from", "to", "detail"]
        );
        assert_eq!(
            headers(dir.path().join("call_log.csv")),
            ["tick", "floor", "direction", "outcome"]
        );
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_lift_event(&LiftEventRow {
            tick: 0, lift: 2, event: "departure", from: 7, to: 5, detail: 400,
        })
        .unwrap();
        w.write_call(&CallRow { tick: 0, floor: -3, direction: "", outcome: "ignored" })
            .unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("lift_events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["0", "2", "departure", "7", "5", "400"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("call_log.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["0", "-3", "", "ignored"]);
    }
}

#[cfg(test)]
mod observer_tests {
    use lift_core::{FleetConfig, FloorCall, Tick};
    use lift_sim::{DispatchBuilder, DispatchObserver};

    use crate::row::{CallRow, LiftEventRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, EventLogObserver, OutputError, OutputResult};

    #[derive(Default)]
    struct MemoryWriter {
        events:   Vec<LiftEventRow>,
        calls:    Vec<CallRow>,
        finishes: usize,
    }

    impl OutputWriter for MemoryWriter {
        fn write_lift_event(&mut self, row: &LiftEventRow) -> OutputResult<()> {
            self.events.push(*row);
            Ok(())
        }
        fn write_call(&mut self, row: &CallRow) -> OutputResult<()> {
            self.calls.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    /// Fails every call write with a numbered message, and `finish` when
    /// `fail_finish` is set.
    #[derive(Default)]
    struct FailingWriter {
        attempts:    usize,
        fail_finish: bool,
    }

    impl OutputWriter for FailingWriter {
        fn write_lift_event(&mut self, _row: &LiftEventRow) -> OutputResult<()> {
            Ok(())
        }
        fn write_call(&mut self, _row: &CallRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.attempts))))
        }
        fn finish(&mut self) -> OutputResult<()> {
            if self.fail_finish {
                return Err(OutputError::Io(std::io::Error::other("flush failed")));
            }
            Ok(())
        }
    }

    #[test]
    fn logs_calls_and_lifecycle() {
        let mut sys = DispatchBuilder::new(FleetConfig::new(1, 5)).build().unwrap();
        let mut obs = EventLogObserver::new(MemoryWriter::default());
        sys.request_call(FloorCall::up(3), &mut obs).unwrap();
        sys.request_call(FloorCall::at(0), &mut obs).unwrap();
        sys.request_call(FloorCall::down(4), &mut obs).unwrap();
        sys.run_until_idle(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        let outcomes: Vec<_> = w.calls.iter().map(|c| (c.tick, c.floor, c.direction, c.outcome)).collect();
        assert_eq!(
            outcomes,
            vec![
                (0, 3, "up", "dispatched"),
                (0, 0, "", "ignored"),
                (0, 4, "down", "queued"),
                (5_400, 4, "", "replayed"),
                (5_400, 4, "", "dispatched"),
            ]
        );

        let events: Vec<_> = w.events.iter().map(|e| (e.tick, e.event)).collect();
        assert_eq!(&events[..5], &[
            (0, "departure"),
            (400, "reached"),
            (400, "doors_opened"),
            (3_400, "doors_closed"),
            (5_400, "idle"),
        ]);
        assert_eq!((w.events[0].from, w.events[0].to, w.events[0].detail), (1, 3, 400));
        assert_eq!(w.events[5].event, "departure");
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn keeps_first_error_only() {
        let mut obs = EventLogObserver::new(FailingWriter::default());
        obs.on_call_ignored(Tick(0), FloorCall::at(0));
        obs.on_call_ignored(Tick(1), FloorCall::at(-1));

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("write 1"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().attempts, 2);
    }

    #[test]
    fn explicit_finish_after_partial_run() {
        let mut sys = DispatchBuilder::new(FleetConfig::new(1, 5)).build().unwrap();
        let mut obs = EventLogObserver::new(MemoryWriter::default());
        sys.request_call(FloorCall::at(3), &mut obs).unwrap();
        sys.run_until(Tick(1_000), &mut obs).unwrap();
        assert_eq!(obs.into_writer().finishes, 0);

        let mut obs = EventLogObserver::new(MemoryWriter::default());
        sys.run_for(10_000, &mut obs).unwrap();
        obs.finish();
        assert!(obs.take_error().is_none());
        let w = obs.into_writer();
        assert_eq!(w.finishes, 1);
        assert_eq!(w.events.last().map(|e| e.event), Some("idle"));
    }

    #[test]
    fn finish_error_is_stored() {
        let mut obs = EventLogObserver::new(FailingWriter { attempts: 0, fail_finish: true });
        obs.finish();
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("flush failed"));
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut sys = DispatchBuilder::new(FleetConfig::new(2, 6)).build().unwrap();
        let mut obs = EventLogObserver::new(CsvWriter::new(dir.path()).unwrap());
        sys.request_call(FloorCall::up(2), &mut obs).unwrap();
        sys.request_call(FloorCall::up(2), &mut obs).unwrap();
        sys.run_until_idle(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("call_log.csv")).unwrap();
        let outcomes: Vec<String> = rdr.records().map(|r| r.unwrap()[3].to_owned()).collect();
        assert_eq!(outcomes, ["dispatched", "already_served"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("lift_events.csv")).unwrap();
        assert_eq!(rdr.records().count(), 5);
    }
}
