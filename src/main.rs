fn main() {
    arraykit::cli::run();
}
