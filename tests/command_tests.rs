//! Command opcode composition and command transaction tests.

mod common;

use ad525x::{Ad525x, Command, Error, Variant};
use common::MockWire;

#[test]
fn opcode_table_is_bit_exact() {
    let cases = [
        (Command::Nop, 0x80),
        (Command::RestoreWiper(0), 0x88),
        (Command::StoreWiper(0), 0x90),
        (Command::Decrement6dB(0), 0x98),
        (Command::DecrementAll6dB, 0xA0),
        (Command::DecrementStep(0), 0xA8),
        (Command::DecrementAllSteps, 0xB0),
        (Command::RestoreAllWipers, 0xB8),
        (Command::Increment6dB(0), 0xC0),
        (Command::IncrementAll6dB, 0xC8),
        (Command::IncrementStep(0), 0xD0),
        (Command::IncrementAllSteps, 0xD8),
    ];
    for (command, opcode) in cases {
        assert_eq!(command.opcode(), Ok(opcode), "{command:?}");
    }
}

#[test]
fn per_wiper_commands_fold_the_index_into_the_low_bits() {
    assert_eq!(Command::RestoreWiper(2).opcode(), Ok(0x8A));
    assert_eq!(Command::StoreWiper(3).opcode(), Ok(0x93));
    assert_eq!(Command::IncrementStep(1).opcode(), Ok(0xD1));
    assert_eq!(Command::Decrement6dB(3).opcode(), Ok(0x9B));
    // Whole-device commands carry no index bits.
    assert_eq!(Command::IncrementAll6dB.opcode(), Ok(0xC8));
}

#[test]
fn per_wiper_commands_validate_the_index() {
    for command in [
        Command::RestoreWiper(4),
        Command::StoreWiper(4),
        Command::IncrementStep(9),
        Command::DecrementStep(4),
        Command::Increment6dB(4),
        Command::Decrement6dB(0xFF),
    ] {
        assert_eq!(command.opcode(), Err(Error::BadRegister), "{command:?}");
    }
}

#[test]
fn commands_issue_a_single_byte_with_no_data_phase() {
    let mut bus = MockWire::new();
    {
        let mut pot = Ad525x::new(&mut bus, Variant::Ad5254);
        pot.initialize(0).unwrap();
        pot.reset_device().unwrap();
        pot.restore_wiper(2).unwrap();
        pot.store_wiper(1).unwrap();
        pot.increment_wiper(0).unwrap();
        pot.decrement_wiper(3).unwrap();
        pot.increment_wiper_6db(2).unwrap();
        pot.decrement_wiper_6db(1).unwrap();
        pot.restore_all_wipers().unwrap();
        pot.increment_all_wipers().unwrap();
        pot.decrement_all_wipers().unwrap();
        pot.increment_all_wipers_6db().unwrap();
        pot.decrement_all_wipers_6db().unwrap();
    }
    assert_eq!(
        bus.commands,
        vec![0x80, 0x8A, 0x91, 0xD0, 0xAB, 0xC2, 0x99, 0xB8, 0xD8, 0xB0, 0xC8, 0xA0]
    );
    assert!(bus.writes.is_empty(), "commands must carry no data byte");
}

#[test]
fn invalid_index_fails_before_the_bus_is_touched() {
    let mut bus = MockWire::new();
    {
        let mut pot = Ad525x::new(&mut bus, Variant::Ad5253);
        pot.initialize(0).unwrap();
        assert_eq!(pot.restore_wiper(4), Err(Error::BadRegister));
        assert_eq!(pot.store_wiper(4), Err(Error::BadRegister));
        assert_eq!(pot.increment_wiper_6db(4), Err(Error::BadRegister));
        assert_eq!(pot.last_error_code(), 5);
    }
    assert_eq!(bus.transactions, 0);
}

#[test]
fn command_transport_errors_propagate() {
    let mut bus = MockWire::new();
    bus.fail_end = Some(Error::DataNack);
    let mut pot = Ad525x::new(bus, Variant::Ad5254);
    pot.initialize(0).unwrap();
    assert_eq!(pot.store_wiper(0), Err(Error::DataNack));
    assert_eq!(pot.last_error_code(), 3);
}

#[test]
fn commands_require_initialization() {
    let mut pot = Ad525x::new(MockWire::new(), Variant::Ad5254);
    assert_eq!(pot.restore_all_wipers(), Err(Error::NotInitialized));
    assert_eq!(pot.command(Command::Nop), Err(Error::NotInitialized));
    assert_eq!(pot.last_error_code(), 10);
}
