#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        ion_ci_fuzz::test(data);
    });
}
