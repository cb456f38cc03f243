fn main() {
    autonav::app::cli::run();
}
