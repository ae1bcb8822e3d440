//! Save a small shape collection to a file, load it back, and describe it.
//!
//! Run with: cargo run --example roundtrip [path]

use shaperec::Shape;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "shapes.txt".to_string());

    let shapes = vec![
        Shape::Square { x: 0, y: 0, side: 10 },
        Shape::Rectangle { x: 1, y: 1, width: 20, height: 10 },
        Shape::Circle { x: 5, y: 5, radius: 7 },
        Shape::Ellipse { x: 2, y: 2, width: 10, height: 6 },
    ];

    if let Err(e) = shaperec::save(&path, &shapes) {
        eprintln!("Error: {:?}", miette::Report::new(e));
        std::process::exit(1);
    }

    match shaperec::load(&path) {
        Ok(loaded) => {
            for shape in &loaded {
                println!("{shape}");
            }
        }
        Err(e) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}
