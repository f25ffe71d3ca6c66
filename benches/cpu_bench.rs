// CPU dispatch benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use famicore::{Bus, Cpu};
use std::hint::black_box;

/// Fill RAM with a repeating instruction pattern and point the CPU at it.
/// RAM mirroring means the PC can walk the region without running off the
/// end of initialized memory.
fn program_in_ram(pattern: &[u8]) -> (Cpu, Bus) {
    let mut bus = Bus::new();
    let mut addr = 0u16;
    while (addr as usize) < 0x0800 - pattern.len() {
        for &byte in pattern {
            bus.write(addr, byte);
            addr += 1;
        }
    }
    let mut cpu = Cpu::new();
    cpu.pc = 0;
    (cpu, bus)
}

fn bench_cpu_instructions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_instructions");

    group.bench_function("nop", |b| {
        let (mut cpu, mut bus) = program_in_ram(&[0xEA]);
        b.iter(|| {
            if cpu.pc > 0x0700 {
                cpu.pc = 0;
            }
            cpu.step(black_box(&mut bus)).unwrap();
        });
    });

    group.bench_function("lda_immediate", |b| {
        let (mut cpu, mut bus) = program_in_ram(&[0xA9, 0x42]);
        b.iter(|| {
            if cpu.pc > 0x0700 {
                cpu.pc = 0;
            }
            cpu.step(black_box(&mut bus)).unwrap();
        });
    });

    group.bench_function("adc_immediate", |b| {
        let (mut cpu, mut bus) = program_in_ram(&[0x69, 0x01]);
        b.iter(|| {
            if cpu.pc > 0x0700 {
                cpu.pc = 0;
            }
            cpu.step(black_box(&mut bus)).unwrap();
        });
    });

    group.bench_function("absolute_x_with_page_cross", |b| {
        let (mut cpu, mut bus) = program_in_ram(&[0xBD, 0xFF, 0x02]); // LDA $02FF,X
        cpu.x = 0x01;
        b.iter(|| {
            if cpu.pc > 0x0700 {
                cpu.pc = 0;
            }
            cpu.step(black_box(&mut bus)).unwrap();
        });
    });

    group.finish();
}

fn bench_trace_generation(c: &mut Criterion) {
    c.bench_function("trace_line", |b| {
        let (mut cpu, bus) = program_in_ram(&[0xA9, 0x42]);
        cpu.pc = 0;
        b.iter(|| black_box(cpu.trace(&bus)));
    });
}

criterion_group!(benches, bench_cpu_instructions, bench_trace_generation);
criterion_main!(benches);
