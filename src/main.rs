use advent::*;

fn main() {
    let args: Args = Args::parse();

    solutions().run(&args);
}
