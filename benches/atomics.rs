#![allow(dead_code)]

use fluxbench::{Bencher, flux};
use std::hint::black_box;
use std::thread;

use hetmem::prelude::*;

// ---------------------------------------------------------------------------
// Single-threaded: native fetch_add vs compare-and-swap loop
// ---------------------------------------------------------------------------

#[flux::bench(group = "atomic_add_uncontended")]
fn add_u32(b: &mut Bencher) {
    let mut x = 0u32;
    b.iter(|| black_box(unsafe { Atomics::<Host>::add(&mut x, 1) }));
}

#[flux::bench(group = "atomic_add_uncontended")]
fn add_u64(b: &mut Bencher) {
    let mut x = 0u64;
    b.iter(|| black_box(unsafe { Atomics::<Host>::add(&mut x, 1) }));
}

#[flux::bench(group = "atomic_add_uncontended")]
fn add_f32(b: &mut Bencher) {
    let mut x = 0.0f32;
    b.iter(|| black_box(unsafe { Atomics::<Host>::add(&mut x, 1.0) }));
}

#[flux::bench(group = "atomic_add_uncontended")]
fn add_f64(b: &mut Bencher) {
    let mut x = 0.0f64;
    b.iter(|| black_box(unsafe { Atomics::<Host>::add(&mut x, 1.0) }));
}

// ---------------------------------------------------------------------------
// Contended: 4 threads on one element
// ---------------------------------------------------------------------------

fn contended<T: AtomicAdd<Host> + Send + Sync>(view: HostPointer<T>, delta: T) {
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(move || {
                for _ in 0..1_000 {
                    black_box(unsafe { view.atomic_add(0, delta) });
                }
            });
        }
    });
}

#[flux::bench(group = "atomic_add_contended")]
fn contended_i32(b: &mut Bencher) {
    let mut data = [0i32];
    let view: HostPointer<i32> = unsafe { TaggedPointer::from_slice(&mut data) }.unwrap();
    b.iter(|| contended(view, 1));
}

#[flux::bench(group = "atomic_add_contended")]
fn contended_f64(b: &mut Bencher) {
    let mut data = [0.0f64];
    let view: HostPointer<f64> = unsafe { TaggedPointer::from_slice(&mut data) }.unwrap();
    b.iter(|| contended(view, 0.5));
}

// ---------------------------------------------------------------------------
// Element access: view vs slice
// ---------------------------------------------------------------------------

#[flux::bench(group = "host_view_sum")]
fn view_index_sum(b: &mut Bencher) {
    let mut data: Vec<f32> = (0..100_000).map(|i| (i % 1000) as f32).collect();
    let view: HostPointer<f32> = unsafe { TaggedPointer::from_slice(&mut data) }.unwrap();
    b.iter(|| {
        let mut acc = 0.0f32;
        for i in 0..view.size() {
            acc += view[i];
        }
        black_box(acc)
    });
}

#[flux::bench(group = "host_view_sum")]
fn view_iter_sum(b: &mut Bencher) {
    let mut data: Vec<f32> = (0..100_000).map(|i| (i % 1000) as f32).collect();
    let view: HostPointer<f32> = unsafe { TaggedPointer::from_slice(&mut data) }.unwrap();
    b.iter(|| black_box(view.iter().sum::<f32>()));
}

fn main() {
    fluxbench_cli::run().unwrap();
}
