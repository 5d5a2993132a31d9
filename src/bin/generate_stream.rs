//! Sample stream generator.
//! Reproduces the output of the fixed-point rsqrt test program so the
//! analyzer can be exercised end to end: preamble noise, the CSV header,
//! data rows, and a trailing performance block.

use argh::FromArgs;
use std::time::Instant;

/// Q1.16 representation of 1.0.
const Q16_ONE: u32 = 1 << 16;

/// `1/sqrt(2^k)` in Q1.16 for k = 0..=31.
const RSQRT_TABLE: [u32; 32] = [
    65536, 46341, 32768, 23170, 16384, // 2^0 to 2^4
    11585, 8192, 5793, 4096, 2896, // 2^5 to 2^9
    2048, 1448, 1024, 724, 512, // 2^10 to 2^14
    362, 256, 181, 128, 90, // 2^15 to 2^19
    64, 45, 32, 23, 16, // 2^20 to 2^24
    11, 8, 6, 4, 3, // 2^25 to 2^29
    2, 1, // 2^30, 2^31
];

/// Generate a fast_rsqrt precision sweep on stdout.
#[derive(FromArgs, Debug)]
struct Args {
    /// newton-raphson iterations captured per row: 1 or 2 (default: 2)
    #[argh(option, short = 'i', default = "2")]
    iterations: u32,

    /// largest input value to sweep (default: 100)
    #[argh(option, short = 'm', default = "100")]
    max_x: u32,
}

/// Table lookup plus linear interpolation between neighbouring powers of two.
fn initial_guess(x: u32) -> u32 {
    debug_assert!(x > 0);
    let exp = 31 - x.leading_zeros();
    let mut y = RSQRT_TABLE[exp as usize];

    if x > (1u32 << exp) {
        let y_next = if exp < 31 {
            RSQRT_TABLE[exp as usize + 1]
        } else {
            0
        };
        let delta = y - y_next;
        let frac = ((((x as u64) - (1u64 << exp)) << 16) >> exp) as u32;
        y -= ((delta as u64 * frac as u64) >> 16) as u32;
    }
    y
}

/// One Newton-Raphson step, `y' = y * (3 - x*y^2) / 2`, in the 32-bit
/// truncating arithmetic of the fixed-point routine.
fn refine(x: u32, y: u32) -> u32 {
    let y_squared = (y as u64 * y as u64) as u32;
    let x_y_squared = ((x as u64 * y_squared as u64) >> 16) as u32;
    let correction = (3u32 << 16).wrapping_sub(x_y_squared);
    ((y as u64 * correction as u64) >> 17) as u32
}

/// The full row for one input: `x`, the initial guess, then the value after
/// each refinement.
///
/// `x = 1` is exact from the start and is reported as Q16_ONE at every
/// stage; the truncating refinement would corrupt it (65536^2 does not fit
/// in 32 bits).
fn sweep_row(x: u32, iterations: u32) -> Vec<u32> {
    let mut row = Vec::with_capacity(iterations as usize + 2);
    row.push(x);

    if x == 1 {
        for _ in 0..=iterations {
            row.push(Q16_ONE);
        }
        return row;
    }

    let mut y = initial_guess(x);
    row.push(y);
    for _ in 0..iterations {
        y = refine(x, y);
        row.push(y);
    }
    row
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    if args.iterations < 1 || args.iterations > 2 {
        anyhow::bail!(
            "Unsupported iteration count {}: expected 1 or 2",
            args.iterations
        );
    }
    if args.max_x < 1 {
        anyhow::bail!("Sweep needs at least x = 1");
    }

    let header = if args.iterations == 1 {
        "x,y0,y1"
    } else {
        "x,y0,y1,y2"
    };

    println!("fast_rsqrt precision sweep (Q1.16, x=1 to {})", args.max_x);
    println!("{header}");

    let start = Instant::now();
    for x in 1..=args.max_x {
        let row = sweep_row(x, args.iterations);
        let fields: Vec<String> = row.iter().map(u32::to_string).collect();
        println!("{}", fields.join(","));
    }
    let elapsed = start.elapsed();

    println!("--- Performance ---");
    println!(
        "Total time ({} calls): {} ns",
        args.max_x,
        elapsed.as_nanos()
    );
    println!(
        "Avg time per call: {} ns",
        elapsed.as_nanos() / args.max_x as u128
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_exact_on_powers_of_four() {
        assert_eq!(initial_guess(1), 65536);
        assert_eq!(initial_guess(4), 32768);
        assert_eq!(initial_guess(16), 16384);
        assert_eq!(initial_guess(64), 8192);
    }

    #[test]
    fn refinement_is_stable_on_exact_values() {
        // 1/sqrt(4) = 32768 in Q1.16 is a fixed point of the iteration.
        assert_eq!(refine(4, 32768), 32768);
    }

    #[test]
    fn refinement_moves_toward_the_reference() {
        for x in [5u32, 10, 25, 77, 100] {
            let reference = 65536.0 / (x as f64).sqrt();
            let guess = initial_guess(x);
            let refined = refine(x, guess);

            let before = (guess as f64 - reference).abs();
            let after = (refined as f64 - reference).abs();
            assert!(after < before, "x = {x}: {after} vs {before}");
        }
    }

    #[test]
    fn unit_input_is_exact_at_every_stage() {
        assert_eq!(sweep_row(1, 2), vec![1, 65536, 65536, 65536]);
        assert_eq!(sweep_row(1, 1), vec![1, 65536, 65536]);
    }

    #[test]
    fn row_arity_follows_iteration_count() {
        assert_eq!(sweep_row(4, 1).len(), 3);
        assert_eq!(sweep_row(4, 2).len(), 4);
    }

    #[test]
    fn exact_power_row_holds_steady() {
        assert_eq!(sweep_row(4, 2), vec![4, 32768, 32768, 32768]);
    }
}
