fn main() {
    krishi_sahayak::run_app();
}
