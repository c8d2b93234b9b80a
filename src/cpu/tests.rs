use super::*;
use crate::memory::Rom;
use crate::options::Options;

/// Packs an opcode and its data byte into a ROM word (low byte = opcode).
fn word(opcode: u8, data: u8) -> u16 {
    ((data as u16) << 8) | opcode as u16
}

fn setup_test_cpu(words: Vec<u16>) -> Cpu {
    Cpu::new(Rom::from_words(words), Options::default()).unwrap()
}

#[test]
fn test_reset_state() {
    let cpu = setup_test_cpu(Vec::new());
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.prev_pc, 0);
    assert_eq!(cpu.ir, 0x02);
    assert_eq!(cpu.d, 0);
    assert_eq!(cpu.acc, 0);
    assert_eq!(cpu.x, 0);
    assert_eq!(cpu.y, 0);
    assert_eq!(cpu.out, 0);
    assert_eq!(cpu.prev_out, 0);
    assert_eq!(cpu.xout, 0);
    assert_eq!(cpu.input, 0);
    assert_eq!(cpu.cycles, 0);
}

#[test]
fn test_effective_nop_at_power_on() {
    // The reset placeholder `ld acc, acc` executes while the first real
    // instruction is fetched
    let mut cpu = setup_test_cpu(vec![word(0x00, 0x42)]);
    cpu.step();
    assert_eq!(cpu.pc, 1);
    assert_eq!(cpu.prev_pc, 0);
    assert_eq!(cpu.ir, 0x00);
    assert_eq!(cpu.d, 0x42);
    assert_eq!(cpu.acc, 0);
    assert_eq!(cpu.cycles, 1);
}

#[test]
fn test_far_jump_via_y() {
    // jmp y, $FE: ins=7, mode=0, bus=0
    let mut cpu = setup_test_cpu(vec![word(0xE0, 0xFE)]);
    cpu.y = 0x12;
    cpu.step(); // installs the jump into the pipeline register
    assert_eq!(cpu.ir, 0xE0);
    assert_eq!(cpu.d, 0xFE);
    cpu.step(); // commits the jump
    assert_eq!(cpu.pc, 0x12FE);
}

#[test]
fn test_far_jump_high_byte_from_y_low_byte_from_bus() {
    // jmp y, acc: the far jump's low byte follows the bus selector
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0xE2;
    cpu.d = 0x00;
    cpu.y = 0x12;
    cpu.acc = 0x34;
    cpu.step();
    assert_eq!(cpu.pc, 0x1234);
}

#[test]
fn test_conditional_branch_taken_on_zero() {
    // beq $10: ins=7, mode=4, bus=0
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.pc = 0x0205;
    cpu.ir = 0xF0;
    cpu.d = 0x10;
    cpu.acc = 0;
    cpu.step();
    // Taken: the low byte is replaced, the page is kept
    assert_eq!(cpu.pc, 0x0210);
}

#[test]
fn test_conditional_branch_not_taken_increments_pc() {
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.pc = 0x0205;
    cpu.ir = 0xF0;
    cpu.d = 0x10;
    cpu.acc = 1;
    cpu.step();
    assert_eq!(cpu.pc, 0x0206);
}

#[test]
fn test_branch_with_ram_bus_reads_zero_page() {
    // bra [$21]: an always-taken branch whose target comes from RAM
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ram.write(0x21, 0x66);
    cpu.pc = 0x0300;
    cpu.ir = 0xFD;
    cpu.d = 0x21;
    cpu.step();
    assert_eq!(cpu.pc, 0x0366);
}

#[test]
fn test_jump_does_not_write_registers() {
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0xE0;
    cpu.d = 0x00;
    cpu.acc = 0x11;
    cpu.x = 0x22;
    cpu.y = 0x33;
    cpu.out = 0x04;
    cpu.step();
    assert_eq!(cpu.acc, 0x11);
    assert_eq!(cpu.x, 0x22);
    assert_eq!(cpu.y, 0x33);
    assert_eq!(cpu.out, 0x04);
}

#[test]
fn test_store_with_bus_from_acc() {
    // st acc, [$20]: ins=6, mode=0, bus=2
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0xC2;
    cpu.d = 0x20;
    cpu.acc = 0xAA;
    cpu.step();
    assert_eq!(cpu.ram.read(0x20), 0xAA);
    assert_eq!(cpu.acc, 0xAA);
}

#[test]
fn test_store_writes_bus_value_not_accumulator() {
    // st $30, [$30]: the stored byte is the bus value
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0xC0;
    cpu.d = 0x30;
    cpu.acc = 0xAA;
    cpu.step();
    assert_eq!(cpu.ram.read(0x30), 0x30);
    assert_eq!(cpu.acc, 0xAA);
}

#[test]
fn test_store_with_ram_bus_routes_data_byte() {
    // st ??, [$44]: RAM cannot read and write in one cycle, so the data
    // byte is routed onto the bus
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ram.write(0x44, 0x99);
    cpu.ir = 0xC1;
    cpu.d = 0x44;
    cpu.acc = 0xAA;
    cpu.step();
    assert_eq!(cpu.ram.read(0x44), 0x44);
}

#[test]
fn test_x_auto_increment() {
    // ld [y,x++], out: ins=0, mode=7, bus=1
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ram.write(0x0105, 0x77);
    cpu.ir = 0x1D;
    cpu.x = 0x05;
    cpu.y = 0x01;
    cpu.step();
    assert_eq!(cpu.out, 0x77);
    assert_eq!(cpu.x, 0x06);
}

#[test]
fn test_x_auto_increment_wraps() {
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0x1D;
    cpu.x = 0xFF;
    cpu.y = 0x00;
    cpu.step();
    assert_eq!(cpu.x, 0x00);
}

#[test]
fn test_hsync_rising_edge_latches_xout_and_input() {
    // First cycle raises /HSYNC on the output port; the latch fires on
    // the following cycle, reading the accumulator before that cycle's
    // own writeback
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0x18; // ld $40, out
    cpu.d = 0x40;
    cpu.acc = 0x55;
    cpu.live_input = 0xCD;
    cpu.step();
    assert_eq!(cpu.out, 0x40);
    assert_eq!(cpu.xout, 0x00);
    assert_eq!(cpu.input, 0x00);
    cpu.step();
    assert_eq!(cpu.xout, 0x55);
    assert_eq!(cpu.input, 0xCD);
}

#[test]
fn test_hsync_high_without_edge_does_not_latch() {
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.out = 0x40;
    cpu.prev_out = 0x40;
    cpu.acc = 0x55;
    cpu.live_input = 0xCD;
    cpu.step();
    assert_eq!(cpu.xout, 0x00);
    assert_eq!(cpu.input, 0x00);
}

#[test]
fn test_load_from_input_port() {
    // ld in: bus=3
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0x03;
    cpu.input = 0x5A;
    cpu.step();
    assert_eq!(cpu.acc, 0x5A);
}

#[test]
fn test_load_to_y_register() {
    // ld $42, y: mode=5
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0x14;
    cpu.d = 0x42;
    cpu.acc = 0x99;
    cpu.step();
    assert_eq!(cpu.y, 0x42);
    assert_eq!(cpu.acc, 0x99);
}

#[test]
fn test_add_wraps_modulo_256() {
    // adda $05
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0x80;
    cpu.d = 0x05;
    cpu.acc = 0xFE;
    cpu.step();
    assert_eq!(cpu.acc, 0x03);
}

#[test]
fn test_sub_wraps_modulo_256() {
    // suba $05
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0xA0;
    cpu.d = 0x05;
    cpu.acc = 0x03;
    cpu.step();
    assert_eq!(cpu.acc, 0xFE);
}

#[test]
fn test_out_of_range_write_discarded() {
    // st acc, [y,$00] with y=0x80 lands beyond the 32K of the standard
    // machine and vanishes silently
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0xCA;
    cpu.d = 0x00;
    cpu.y = 0x80;
    cpu.acc = 0xAB;
    cpu.step();
    assert_eq!(cpu.ram.read(0x8000), 0x00);
    assert_eq!(cpu.ram.read(0x0000), 0x00);
}

#[test]
fn test_out_of_range_read_returns_zero() {
    // ld [y,$00] with y=0x80
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ir = 0x09;
    cpu.d = 0x00;
    cpu.y = 0x80;
    cpu.acc = 0x77;
    cpu.step();
    assert_eq!(cpu.acc, 0x00);
}

#[test]
fn test_prev_pc_tracks_pc_across_steps() {
    let mut cpu = setup_test_cpu(vec![
        word(0x00, 0x01), // ld $01
        word(0x80, 0x01), // adda $01
        word(0xFC, 0x00), // bra $00
        word(0x00, 0x00),
    ]);
    for _ in 0..32 {
        let pc_before = cpu.pc;
        cpu.step();
        assert_eq!(cpu.prev_pc, pc_before);
    }
}

#[test]
fn test_latched_instruction_matches_rom_at_prev_pc() {
    let mut cpu = setup_test_cpu(vec![
        word(0x00, 0x11),
        word(0x80, 0x22),
        word(0xA0, 0x33),
        word(0xFC, 0x01), // bra $01, keeping the loop inside the program
    ]);
    for _ in 0..32 {
        cpu.step();
        let fetched: u16 = cpu.rom.fetch(cpu.prev_pc);
        assert_eq!(cpu.ir, (fetched & 0xFF) as u8);
        assert_eq!(cpu.d, (fetched >> 8) as u8);
    }
}

#[test]
fn test_cycles_strictly_monotonic() {
    let mut cpu = setup_test_cpu(Vec::new());
    for expected in 1..=100u64 {
        cpu.step();
        assert_eq!(cpu.cycles, expected);
    }
}

#[test]
fn test_reset_idempotence() {
    let mut cpu = setup_test_cpu(vec![
        word(0x00, 0x37), // ld $37
        word(0x10, 0x40), // ld $40, x
        word(0xC2, 0x20), // st acc, [$20]
        word(0x18, 0x40), // ld $40, out
        word(0xFC, 0x00), // bra $00
    ]);
    let fresh = setup_test_cpu(Vec::new());
    for _ in 0..64 {
        cpu.step();
    }
    cpu.reset(true);
    assert_eq!(cpu.pc, fresh.pc);
    assert_eq!(cpu.prev_pc, fresh.prev_pc);
    assert_eq!(cpu.ir, fresh.ir);
    assert_eq!(cpu.d, fresh.d);
    assert_eq!(cpu.acc, fresh.acc);
    assert_eq!(cpu.x, fresh.x);
    assert_eq!(cpu.y, fresh.y);
    assert_eq!(cpu.out, fresh.out);
    assert_eq!(cpu.prev_out, fresh.prev_out);
    assert_eq!(cpu.xout, fresh.xout);
    assert_eq!(cpu.input, fresh.input);
    assert_eq!(cpu.cycles, fresh.cycles);
    assert_eq!(cpu.ram, fresh.ram);
}

#[test]
fn test_cold_reset_preserves_ram() {
    let mut cpu = setup_test_cpu(Vec::new());
    cpu.ram.write(0x0040, 0x5A);
    cpu.reset(false);
    assert_eq!(cpu.ram.read(0x0040), 0x5A);
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.cycles, 0);
}

#[test]
fn test_disassemble_current() {
    let mut cpu = setup_test_cpu(vec![word(0x00, 0x55)]);
    cpu.step();
    assert_eq!(cpu.disassemble_current(), "0000: 00 55    ld     $55");
}
