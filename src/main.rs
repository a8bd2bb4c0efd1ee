#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        eprintln!("PinLock only runs on Windows");
        std::process::exit(1);
    }
}
