use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            ion_ci_fuzz::test(data);
        });
    }
}
