use nr_scoring::ScoringPipeline;

pub struct AppState {
    pub pipeline: ScoringPipeline,
}

impl AppState {
    pub fn new(pipeline: ScoringPipeline) -> Self {
        Self { pipeline }
    }
}
