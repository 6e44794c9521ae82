use ReactNet::Examples::network_examples::network_examples;
use ReactNet::Utils::logger::init_logger_from;
use ReactNet::settings::{AnalysisSettings, DEFAULT_SETTINGS_FILE};

pub fn main() {
    let settings = AnalysisSettings::from_file(DEFAULT_SETTINGS_FILE);
    if let Err(e) = init_logger_from(&settings) {
        eprintln!("logger not initialised: {}", e);
    }
    for task in 0..4 {
        network_examples(task, &settings);
    }
}
