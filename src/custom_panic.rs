// Customized version of https://github.com/sfackler/rust-log-panics
use crossterm::{ cursor, execute, style };
use std::{ panic, thread };
use backtrace::Backtrace;

// Leaves the terminal readable before printing the panic
pub fn init() {
    panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::new();

        let thread = thread::current();
        let thread = thread.name().unwrap_or("<unnamed>");

        let msg = match info.payload().downcast_ref::<&'static str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => &**s,
                None => "Box<Any>",
            },
        };

        let _ = execute!(std::io::stdout(), style::ResetColor, cursor::Show);

        log::error!("panic in thread '{}': {}", thread, msg);

        match info.location() {
            Some(location) => {
                eprintln!(
                    "\npanic thread '{}' panicked at '{}': {}:{}\n{:?}",
                    thread,
                    msg,
                    location.file(),
                    location.line(),
                    backtrace
                );
            }
            None => eprintln!(
                "\npanic thread '{}' panicked at '{}'\n{:?}",
                thread,
                msg,
                backtrace
            ),
        }
    }));
}
