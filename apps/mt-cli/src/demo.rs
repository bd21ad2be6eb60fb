//! Guided walkthrough printed by `mt-cli demo`.

use std::io::{self, Write};

use mt_units::constants;
use mt_units::{
    DataExt, DataSize, DataUnit, Length, LengthExt, LengthUnit, Mass, MassExt, MassUnit,
    Temperature, TemperatureExt, TemperatureUnit, Time, TimeExt, TimeUnit,
};

type Section = fn(&mut dyn Write) -> io::Result<()>;

const SECTIONS: &[(&str, Section)] = &[
    ("Length", length),
    ("Mass", mass),
    ("Temperature", temperature),
    ("Time", time),
    ("Data", data),
    ("Physics", physics),
    ("Real-world", real_world),
    ("Type Safety", type_safety),
    ("Advanced", advanced),
];

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    for (i, (title, section)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "=== {title} Examples ===")?;
        section(out)?;
    }
    Ok(())
}

fn length(out: &mut dyn Write) -> io::Result<()> {
    let marathon = 42.195_f64.kilometers();
    writeln!(out, "Marathon distance: {}", marathon.converted(LengthUnit::Miles))?;

    let total = 5_i32.kilometers() + 2500_i32.meters();
    writeln!(out, "Total: {total}")?;

    if 1000_i32.meters() == 1_i32.kilometers() {
        writeln!(out, "Equal distances")?;
    }
    Ok(())
}

fn mass(out: &mut dyn Write) -> io::Result<()> {
    let body = 165_i32.pounds();
    writeln!(out, "Weight: {}", body.converted(MassUnit::Kilograms))?;

    let total = 2_i32.kilograms() + 500_i32.grams();
    writeln!(out, "Total mass: {total}")?;

    let weight = 11_i32.stones();
    writeln!(out, "In pounds: {}", weight.converted(MassUnit::Pounds))?;
    Ok(())
}

fn temperature(out: &mut dyn Write) -> io::Result<()> {
    let boiling = 100_i32.celsius();
    writeln!(
        out,
        "Boiling point: {}",
        boiling.converted(TemperatureUnit::Fahrenheit)
    )?;

    let zero = 0_i32.kelvin();
    writeln!(
        out,
        "Absolute zero in Celsius: {}",
        zero.converted(TemperatureUnit::Celsius)
    )?;

    let difference = 25_i32.celsius() - 20_i32.celsius();
    writeln!(out, "Temperature difference: {difference}")?;

    if 32_i32.fahrenheit() == 0_i32.celsius() {
        writeln!(out, "Freezing point")?;
    }
    Ok(())
}

fn time(out: &mut dyn Write) -> io::Result<()> {
    let work_day = 8_i32.hours();
    writeln!(out, "Work day: {}", work_day.converted(TimeUnit::Minutes))?;

    let meeting = 1_i32.hours() + 30_i32.minutes();
    writeln!(out, "Meeting duration: {meeting}")?;

    let ms = 1_i32.milliseconds();
    writeln!(out, "1ms = {}", ms.converted(TimeUnit::Microseconds))?;

    let year = 1_i32.years();
    writeln!(out, "Days in year: {}", year.converted(TimeUnit::Days))?;
    Ok(())
}

fn data(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Download: {}", 150_i32.megabytes())?;

    let ram = 16_i32.gibibytes();
    writeln!(out, "RAM: {}", ram.converted(DataUnit::Mebibytes))?;

    if 1_i32.gibibytes() > 1_i32.gigabytes() {
        writeln!(out, "1 GiB is larger than 1 GB")?;
    }

    let total = 2.5_f64.gigabytes() + 500_i32.megabytes();
    writeln!(out, "Total storage: {total}")?;
    Ok(())
}

fn physics(out: &mut dyn Write) -> io::Result<()> {
    let radius = 5.0;
    writeln!(out, "Circumference: {}", 2.0 * constants::PI * radius)?;

    let distance = constants::SPEED_OF_LIGHT * 1.0;
    writeln!(out, "Light travels {distance} meters in 1 second")?;

    writeln!(out, "Avogadro's number: {:e}", constants::AVOGADRO_CONSTANT)?;
    writeln!(out, "Planck constant: {:e}", constants::PLANCK_CONSTANT)?;
    writeln!(
        out,
        "Gravitational constant: {:e}",
        constants::GRAVITATIONAL_CONSTANT
    )?;

    let pi = constants::lookup("pi").unwrap_or(0.0);
    writeln!(out, "Pi from table: {pi}")?;
    Ok(())
}

fn real_world(out: &mut dyn Write) -> io::Result<()> {
    // miles per gallon
    let efficiency = 30.0;
    let trip = 250_i32.miles();
    writeln!(out, "Fuel needed: {} gallons", trip.value() / efficiency)?;

    let recipe = 2_i32.pounds();
    writeln!(out, "Recipe calls for: {}", recipe.converted(MassUnit::Grams))?;

    let today = 72_i32.fahrenheit();
    writeln!(
        out,
        "Today's temperature: {}",
        today.converted(TemperatureUnit::Celsius)
    )?;

    let sprint = 100_i32.meters();
    let seconds = 9.58;
    writeln!(out, "Average speed: {:.2} m/s", sprint.value() / seconds)?;

    // bandwidth in MB/s
    let file = 4.5_f64.gigabytes();
    let bandwidth = 100_i32.megabytes();
    let transfer = file.converted(DataUnit::Megabytes).value() / bandwidth.value();
    writeln!(out, "Transfer time: {transfer} seconds")?;
    Ok(())
}

fn type_safety(out: &mut dyn Write) -> io::Result<()> {
    let length: Length = 10_i32.meters();
    let mass: Mass = 5_i32.kilograms();
    let time: Time = 2_i32.seconds();
    let temp: Temperature = 25_i32.celsius();
    let data: DataSize = 100_i32.megabytes();

    writeln!(out, "Length: {length}")?;
    writeln!(out, "Mass: {mass}")?;
    writeln!(out, "Time: {time}")?;
    writeln!(out, "Temperature: {temp}")?;
    writeln!(out, "Data: {data}")?;

    // `length + mass` does not compile
    writeln!(out, "Total length: {}", length + 5_i32.meters())?;
    writeln!(out, "Total mass: {}", mass + 2_i32.kilograms())?;
    Ok(())
}

fn advanced(out: &mut dyn Write) -> io::Result<()> {
    let distance = 5000_i32
        .meters()
        .converted(LengthUnit::Kilometers)
        .converted(LengthUnit::Miles);
    writeln!(out, "5000m in miles: {distance}")?;

    // km/h
    let speed = 60.0;
    let hours = 2.5_f64.hours();
    writeln!(out, "Distance traveled: {} km", speed * hours.value())?;

    let mut distances: Vec<Length> = vec![
        100_i32.meters(),
        0.1_f64.kilometers(),
        328_i32.feet(),
        109_i32.yards(),
    ];
    distances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let sorted: Vec<String> = distances.iter().map(ToString::to_string).collect();
    writeln!(out, "Sorted distances: [{}]", sorted.join(", "))?;

    let ratio = 10_i32.kilograms().base_value() / 5_i32.kilograms().base_value();
    writeln!(out, "Mass ratio: {ratio}")?;
    Ok(())
}
