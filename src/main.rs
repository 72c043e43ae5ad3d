fn main() {
    if let Err(e) = particle_engine::core::Engine::run_demo() {
        eprintln!("Engine failed to start: {}", e);
        std::process::exit(1);
    }
}
