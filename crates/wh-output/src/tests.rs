//! Integration tests for wh-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{DeliveryRow, ItemRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn item_row(tick: u64, generator_id: u32) -> ItemRow {
        ItemRow { tick, generator_id, size: 0.25, fragility: 0.5, priority: 0.75 }
    }

    fn delivery_row(tick: u64, agent_id: u32, zone: u16) -> DeliveryRow {
        DeliveryRow { tick, agent_id, zone, size: 0.25, fragility: 0.5, priority: 0.75 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("items.csv").exists());
        assert!(dir.path().join("deliveries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("items.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "generator_id", "size", "fragility", "priority"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "agent_id", "zone", "size", "fragility", "priority"]);
    }

    #[test]
    fn csv_item_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_item(&item_row(5, 0)).unwrap();
        w.write_item(&item_row(9, 2)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("items.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5"); // tick
        assert_eq!(&rows[0][1], "0"); // generator_id
        assert_eq!(&rows[0][2], "0.25");
        assert_eq!(&rows[1][1], "2");
    }

    #[test]
    fn csv_delivery_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_delivery(&delivery_row(12, 1, 4)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "12"); // tick
        assert_eq!(&rows[0][1], "1");  // agent_id
        assert_eq!(&rows[0][2], "4");  // zone
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;
    use wh_core::{AgentId, GeneratorId, ItemAttrs, Tick, ZoneId};
    use wh_sim::SimObserver;

    use crate::csv::CsvWriter;
    use crate::SimOutputObserver;

    #[test]
    fn observer_logs_generation_and_delivery() {
        let dir = TempDir::new().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);

        let item = ItemAttrs::new(0.1, 0.9, 0.9);
        obs.on_item_generated(Tick(3), GeneratorId(0), item);
        obs.on_pickup(Tick(5), AgentId(0), GeneratorId(0), ZoneId(0), item);
        obs.on_delivery(Tick(9), AgentId(0), ZoneId(0), item);
        obs.finish();
        assert!(obs.take_error().is_none());

        let mut items = csv::Reader::from_path(dir.path().join("items.csv")).unwrap();
        assert_eq!(items.records().count(), 1);

        let mut deliveries = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let rows: Vec<_> = deliveries.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "9");
        assert_eq!(&rows[0][3], "0.10");
    }
}
