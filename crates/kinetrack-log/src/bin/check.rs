use std::env;

fn main() {
    let args = env::args().skip(1);
    if args.len() == 0 {
        eprintln!("usage: check <file> [<file>...]");
        std::process::exit(1);
    }

    let mut failed = 0usize;
    for path in args {
        match kinetrack_log::load_path(&path) {
            Ok(document) => {
                println!(
                    "OK {path}: {} frames, {} trackers, {} samples",
                    document.num_frames,
                    document.trackers.len(),
                    document.sample_count()
                );
            }
            Err(err) => {
                match std::error::Error::source(&err) {
                    Some(source) => println!("ERR {path}: {err}: {source}"),
                    None => println!("ERR {path}: {err}"),
                }
                failed += 1;
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
