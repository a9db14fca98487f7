fn main() {
    stubsmith::app::cli::run();
}
