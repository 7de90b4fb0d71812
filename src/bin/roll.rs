use rolldesc::{Session, SimpleStringifier, Stringify};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut verbose = false;
    let mut notation = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ => notation = Some(arg),
        }
    }

    match notation {
        Some(notation) => {
            let outcome = rolldesc::roll(&notation)?;
            if verbose {
                println!("{}", SimpleStringifier::new().stringify(&outcome));
            } else {
                println!("{}", outcome.final_result());
            }
        }
        None => self_test()?,
    }
    Ok(())
}

// Without an argument, walk a few representative rolls so a bare invocation
// shows the notation off.
fn self_test() -> Result<(), Box<dyn Error>> {
    let mut session = Session::new("3d6rr2o")?;
    for _ in 0..6 {
        session.roll()?;
    }
    session.set_notation("3d8*10")?;
    session.roll()?;
    session.set_notation("6d10>7sb=4")?;
    session.roll()?;

    let stringifier = SimpleStringifier::new();
    for outcome in session.outcomes() {
        println!("{}", stringifier.stringify(outcome));
    }
    Ok(())
}
