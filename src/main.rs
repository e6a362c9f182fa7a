fn main() {
    upgrade_remix::run_cli();
}
