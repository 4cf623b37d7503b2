use card_detector::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use card_detector::{CardDetector, DetectorParams};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Demo: detect a card in a photo, save the rectified crop next to it and
/// print the outcome as JSON.
fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        eprintln!("usage: card_demo <image> [output.png]");
        return ExitCode::FAILURE;
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| input.with_extension("card.png"));

    let img = match load_rgb_image(&input) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let detector = CardDetector::new(DetectorParams::default());
    let (card, outcome) = detector.detect_from_array_with_report(&img, true);

    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize outcome: {err}"),
    }

    let Some(card) = card else {
        eprintln!("no card detected in {}", input.display());
        return ExitCode::FAILURE;
    };

    if let Err(err) = save_rgb_image(&card, &output) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = write_json_file(&output.with_extension("json"), &outcome) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    println!("saved {}", output.display());
    ExitCode::SUCCESS
}
