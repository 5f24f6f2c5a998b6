use std::cell::{Cell, RefCell};

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use opt3001::{
    lux_from_raw, Callbacks, Configuration, Device, Error, I2cBus, Register, DEVICE_ADDRESS,
};

type ReadFn = fn(u8, u8) -> Option<u16>;
type WriteFn = fn(u8, u8, u16) -> bool;

#[test]
fn init_writes_continuous_100ms_through_callbacks() {
    let writes = RefCell::new(Vec::new());
    let bus = Callbacks::new(
        |_, _| Some(0),
        |address, register, value| {
            writes.borrow_mut().push((address, register, value));
            true
        },
    );

    let mut device = Device::new(bus).unwrap();
    assert_eq!(device.init(), Ok(()));
    drop(device);

    assert_eq!(writes.into_inner(), [(DEVICE_ADDRESS, 0x01, 0x4000)]);
}

#[test]
fn missing_capability_is_a_config_error_without_traffic() {
    let calls = Cell::new(0);

    let write_only: Callbacks<ReadFn, _> = Callbacks {
        read: None,
        write: Some(|_: u8, _: u8, _: u16| {
            calls.set(calls.get() + 1);
            true
        }),
    };
    assert!(matches!(Device::new(write_only), Err(Error::Config)));

    let read_only: Callbacks<_, WriteFn> = Callbacks {
        read: Some(|_: u8, _: u8| {
            calls.set(calls.get() + 1);
            Some(0u16)
        }),
        write: None,
    };
    assert!(matches!(Device::new(read_only), Err(Error::Config)));

    assert_eq!(calls.get(), 0);
}

#[test]
fn failing_write_is_a_transport_error_and_word_is_unmasked() {
    let seen = RefCell::new(Vec::new());
    let mut bus = Callbacks::new(
        |_, _| Some(0),
        |_, _, value| {
            seen.borrow_mut().push(value);
            false
        },
    );

    let mut device = Device::new(&mut bus).unwrap();
    assert_eq!(device.configure(0xABCDu16), Err(Error::Transport));
    drop(device);
    drop(bus);

    assert_eq!(seen.into_inner(), [0xABCD]);
}

#[test]
fn failing_read_is_a_transport_error() {
    let mut device = Device::new(Callbacks::new(|_, _| None, |_, _, _| true)).unwrap();
    assert_eq!(device.read_lux(), Err(Error::Transport));
}

#[test]
fn configure_twice_issues_two_identical_writes() {
    let writes = RefCell::new(Vec::new());
    let reads = Cell::new(0);
    let bus = Callbacks::new(
        |_, register| {
            reads.set(reads.get() + 1);
            assert_eq!(register, Register::Result.addr());
            Some(0x0001)
        },
        |address, register, value| {
            writes.borrow_mut().push((address, register, value));
            true
        },
    );

    let mut device = Device::new(bus).unwrap();
    let word = Configuration::MODE_SINGLE_SHOT | Configuration::CONVERSION_TIME_800MS;
    device.configure(word).unwrap();
    device.configure(word).unwrap();
    let lux = device.read_lux().unwrap();
    drop(device);

    assert!((lux - 0.01).abs() < 1e-6);
    assert_eq!(reads.get(), 1);
    assert_eq!(
        writes.into_inner(),
        [(0x44, 0x01, 0x2800), (0x44, 0x01, 0x2800)]
    );
}

#[test]
fn read_lux_matches_formula_for_sample_patterns() {
    for raw in [0x0000u16, 0x0001, 0x0FFF, 0x1234, 0x8ABC, 0xB000, 0xBFFF, 0xC410, 0xFFFF] {
        let mut device = Device::new(Callbacks::new(move |_, _| Some(raw), |_, _, _| true)).unwrap();
        let expected = (0.01 * (1u32 << ((raw >> 12) & 0xF)) as f64 * (raw & 0xFFF) as f64) as f32;

        assert_eq!(device.read_lux().unwrap(), expected, "raw = {raw:#06x}");
        assert_eq!(lux_from_raw(raw), expected);
    }
}

#[derive(Debug)]
struct BusFault;

impl embedded_hal::i2c::Error for BusFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address)
    }
}

/// Minimal OPT3001 register file behind an I2C interface.
struct SimulatedSensor {
    pointer: u8,
    result: u16,
    configuration: u16,
    nack: bool,
}

impl SimulatedSensor {
    fn new(result: u16) -> Self {
        Self {
            pointer: 0,
            result,
            configuration: 0xC810,
            nack: false,
        }
    }
}

impl ErrorType for SimulatedSensor {
    type Error = BusFault;
}

impl I2c for SimulatedSensor {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.nack || address != 0x44 {
            return Err(BusFault);
        }
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    self.pointer = bytes[0];
                    if let [_, msb, lsb] = **bytes {
                        if self.pointer == 0x01 {
                            self.configuration = u16::from_be_bytes([msb, lsb]);
                        }
                    }
                }
                Operation::Read(buffer) => {
                    let value = match self.pointer {
                        0x00 => self.result,
                        0x01 => self.configuration,
                        0x7E => 0x5449,
                        0x7F => 0x3001,
                        _ => 0,
                    };
                    buffer.copy_from_slice(&value.to_be_bytes());
                }
            }
        }
        Ok(())
    }
}

#[test]
fn i2c_sensor_round_trip() {
    let mut device = Device::new(I2cBus::new(SimulatedSensor::new(0xC410))).unwrap();
    device.init().unwrap();

    let lux = device.read_lux().unwrap();
    assert!((lux - 42598.4).abs() < 0.01);

    let sensor = device.release().release();
    assert_eq!(sensor.configuration, 0x4000);
}

#[test]
fn i2c_nack_is_a_transport_error() {
    let mut sensor = SimulatedSensor::new(0);
    sensor.nack = true;
    let mut device = Device::new(I2cBus::new(sensor)).unwrap();

    assert_eq!(device.init(), Err(Error::Transport));
    assert_eq!(device.read_lux(), Err(Error::Transport));
}
