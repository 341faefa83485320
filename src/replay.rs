use serde_json::json;
use std::{collections::HashMap, fs::File, io::BufWriter};

pub fn create_replay_logger(
    filename: Option<String>,
    grid_width: usize,
    grid_height: usize,
) -> Box<dyn ReplayLogger> {
    match filename {
        None => Box::new(NoOpReplayLogger {}),
        Some(filename) => Box::new(JsonReplayLogger::new(filename, grid_width, grid_height)),
    }
}

pub trait ReplayLogger {
    #[allow(unused_variables)]
    fn log_tick(&mut self, tick: u64, ants: usize) {}

    #[allow(unused_variables)]
    fn log_move(&mut self, tick: u64, from: (usize, usize), to: (usize, usize)) {}

    fn clear(&mut self) {}

    fn save(&self) {}
}

#[derive(serde::Serialize)]
struct MoveEvent {
    from: (usize, usize),
    to: (usize, usize),
}

struct TickSummary {
    tick: u64,
    ants: usize,
}

struct NoOpReplayLogger;
impl ReplayLogger for NoOpReplayLogger {}

struct JsonReplayLogger {
    filename: String,
    grid_width: usize,
    grid_height: usize,
    ticks: Vec<TickSummary>,
    moves: HashMap<u64, Vec<MoveEvent>>,
}

impl JsonReplayLogger {
    pub fn new(filename: String, grid_width: usize, grid_height: usize) -> Self {
        JsonReplayLogger {
            filename,
            grid_width,
            grid_height,
            ticks: Vec::new(),
            moves: HashMap::new(),
        }
    }
}

impl ReplayLogger for JsonReplayLogger {
    fn log_tick(&mut self, tick: u64, ants: usize) {
        self.ticks.push(TickSummary { tick, ants });
    }

    fn log_move(&mut self, tick: u64, from: (usize, usize), to: (usize, usize)) {
        self.moves
            .entry(tick)
            .or_default()
            .push(MoveEvent { from, to });
    }

    fn clear(&mut self) {
        self.ticks.clear();
        self.moves.clear();
    }

    fn save(&self) {
        let file = File::create(&self.filename).unwrap();
        let ticks: Vec<_> = self
            .ticks
            .iter()
            .map(|summary| {
                json!({
                    "tick": summary.tick,
                    "ants": summary.ants,
                    "moves": self.moves.get(&summary.tick).unwrap_or(&Vec::new()),
                })
            })
            .collect();

        let data = json!({
            "grid": {
                "width": self.grid_width,
                "height": self.grid_height,
            },
            "ticks": ticks,
        });

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, &data).unwrap();
    }
}
