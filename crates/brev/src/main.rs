fn main() {
    brev_cli::run_main();
}
