//! Glyph geometry for the facility/equipment catalog.
//!
//! Most glyphs are drawn on a 128x128 canvas; small sensor glyphs use 32x32,
//! and a few upright fixtures use 32x33.

use crate::geometry::{Canvas, Glyph, Primitive as P};

const LARGE: Canvas = Canvas::square(128.0);
const SMALL: Canvas = Canvas::square(32.0);
const UPRIGHT: Canvas = Canvas::new(32.0, 33.0);

const WHITE: &str = "#ffffff";

/// Shown for keys that are not in the catalog.
pub static PLACEHOLDER: Glyph = Glyph {
    key: "Placeholder",
    canvas: LARGE,
    primitives: &[
        P::rect(12.0, 12.0, 104.0, 104.0).rounded(12.0).stroked(6.0),
        P::path("M48 48a16 16 0 1 1 24 14c-6 4-8 6-8 14").stroked(6.0).round(),
        P::circle(64.0, 96.0, 5.0),
    ],
};

catalog! {
    // --- Furniture & storage ---
    CABINET = "Cabinet", LARGE, [
        P::rect(24.0, 12.0, 80.0, 104.0).rounded(6.0).stroked(6.0),
        P::path("M24 64h80").stroked(6.0),
        P::rect(52.0, 32.0, 24.0, 8.0).rounded(4.0),
        P::rect(52.0, 84.0, 24.0, 8.0).rounded(4.0),
    ];
    DESK = "Desk", LARGE, [
        P::path("M8 40h112").stroked(8.0).round(),
        P::path("M20 40v72M108 40v72").stroked(6.0).round(),
        P::rect(72.0, 44.0, 32.0, 32.0).rounded(2.0).stroked(4.0),
    ];
    CHAIR = "Chair", LARGE, [
        P::rect(36.0, 12.0, 12.0, 60.0).rounded(4.0),
        P::path("M40 72h48").stroked(6.0).round(),
        P::path("M40 72v44M88 72v44").stroked(6.0).round(),
    ];
    CONFERENCE_TABLE = "ConferenceTable", LARGE, [
        P::ellipse(64.0, 64.0, 40.0, 24.0).stroked(5.0),
        P::circle(64.0, 24.0, 8.0),
        P::circle(64.0, 104.0, 8.0),
        P::circle(14.0, 64.0, 8.0),
        P::circle(114.0, 64.0, 8.0),
    ];
    REFRIGERATOR = "Refrigerator", LARGE, [
        P::rect(32.0, 8.0, 64.0, 112.0).rounded(8.0).stroked(6.0),
        P::path("M32 48h64").stroked(6.0),
        P::path("M44 24v12M44 60v20").stroked(6.0).round(),
    ];

    // --- Fire & life safety ---
    FIRE_ALARM = "FireAlarm", LARGE, [
        P::path("M64 20c-19.9 0-36 16.1-36 36v28l-10 14h92l-10-14V56c0-19.9-16.1-36-36-36z")
            .stroked(4.0),
        P::circle(64.0, 106.0, 8.0),
        P::path("M18 40c4-10 10-18 18-24M110 40c-4-10-10-18-18-24").stroked(4.0).round(),
    ];
    FIRE_EXTINGUISHER = "FireExtinguisher", LARGE, [
        P::rect(44.0, 40.0, 40.0, 80.0).rounded(10.0),
        P::path("M56 40V24h16v16M72 28h22l8 10").stroked(4.0).round(),
        P::rect(52.0, 62.0, 24.0, 24.0).rounded(2.0).fixed_fill(WHITE).opacity(0.8),
    ];
    SMOKE_DETECTOR = "SmokeDetector", LARGE, [
        P::ellipse(64.0, 56.0, 48.0, 20.0).stroked(4.0),
        P::ellipse(64.0, 52.0, 20.0, 8.0),
        P::path("M32 92c8 6 8 14 0 20M64 92c8 6 8 14 0 20M96 92c8 6 8 14 0 20")
            .stroked(4.0)
            .round(),
    ];
    SPRINKLER = "Sprinkler", LARGE, [
        P::rect(52.0, 16.0, 24.0, 20.0).rounded(2.0),
        P::path("M64 36v20").stroked(6.0),
        P::path("M28 64h72").stroked(6.0).round(),
        P::circle(40.0, 88.0, 6.0).opacity(0.7),
        P::circle(64.0, 100.0, 6.0).opacity(0.7),
        P::circle(88.0, 88.0, 6.0).opacity(0.7),
    ];
    FIRE_HYDRANT = "FireHydrant", UPRIGHT, [
        P::path("M10 30V13a6 6 0 0 1 12 0v17z").stroked(2.0),
        P::rect(6.0, 16.0, 20.0, 4.0).rounded(1.0),
        P::circle(16.0, 8.0, 2.0),
        P::rect(8.0, 30.0, 16.0, 3.0),
    ];
    EMERGENCY_EXIT = "EmergencyExit", LARGE, [
        P::rect(8.0, 24.0, 112.0, 80.0).rounded(8.0).stroked(6.0),
        P::circle(52.0, 44.0, 7.0),
        P::path("M50 56l-10 18 12 4-6 18M50 56l14 6 8 12M52 78l14 8").stroked(5.0).round(),
        P::path("M82 64h24m-8-8 8 8-8 8").stroked(5.0).round(),
    ];
    FIRST_AID = "FirstAid", LARGE, [
        P::path("M48 28V18h32v10").stroked(6.0),
        P::rect(16.0, 28.0, 96.0, 80.0).rounded(10.0),
        P::path("M56 48h16v16h16v16H72v16H56V80H40V64h16z").fixed_fill(WHITE),
    ];

    // --- Building elements ---
    DOOR = "Door", LARGE, [
        P::rect(32.0, 12.0, 64.0, 108.0).stroked(6.0),
        P::circle(80.0, 66.0, 5.0),
        P::path("M20 120h88").stroked(6.0).round(),
    ];
    WINDOW = "Window", LARGE, [
        P::rect(20.0, 20.0, 88.0, 88.0).rounded(4.0).stroked(6.0),
        P::path("M64 20v88M20 64h88").stroked(4.0),
    ];
    ELEVATOR = "Elevator", LARGE, [
        P::rect(20.0, 12.0, 88.0, 104.0).rounded(6.0).stroked(6.0),
        P::path("M64 12v104").stroked(4.0),
        P::path("M30 56l12-14 12 14z"),
        P::path("M74 72l12 14 12-14z"),
    ];
    STAIRS = "Stairs", LARGE, [
        P::path("M16 112h24V88h24V64h24V40h24V16").stroked(8.0).round(),
    ];
    TOILET = "Toilet", LARGE, [
        P::rect(36.0, 16.0, 40.0, 40.0).rounded(4.0).stroked(5.0),
        P::path("M24 56h80c0 22-14 36-34 38l6 18H48l6-18C36 92 24 78 24 56z").stroked(5.0).round(),
    ];
    SINK = "Sink", LARGE, [
        P::path("M16 64h96c0 26-20 44-48 44S16 90 16 64z").stroked(5.0),
        P::path("M64 64V28c0-8 6-12 12-12s12 4 12 12").stroked(5.0).round(),
        P::circle(88.0, 36.0, 4.0),
    ];
    PARKING = "Parking", LARGE, [
        P::rect(16.0, 16.0, 96.0, 96.0).rounded(12.0),
        P::path("M52 96V32h20a16 16 0 0 1 0 32H52")
            .stroked(10.0)
            .fixed_stroke(WHITE)
            .round(),
    ];
    ACCESS_CONTROL = "AccessControl", LARGE, [
        P::rect(36.0, 8.0, 56.0, 112.0).rounded(8.0).stroked(6.0),
        P::circle(64.0, 40.0, 12.0).stroked(4.0),
        P::rect(48.0, 72.0, 32.0, 32.0).rounded(4.0).opacity(0.3),
    ];

    // --- Electrical & lighting ---
    POWER_OUTLET = "PowerOutlet", LARGE, [
        P::rect(24.0, 16.0, 80.0, 96.0).rounded(12.0).stroked(6.0),
        P::rect(46.0, 40.0, 8.0, 20.0).rounded(2.0),
        P::rect(74.0, 40.0, 8.0, 20.0).rounded(2.0),
        P::path("M56 84a8 8 0 0 1 16 0v8H56z"),
    ];
    LIGHT_SWITCH = "LightSwitch", LARGE, [
        P::rect(32.0, 12.0, 64.0, 104.0).rounded(8.0).stroked(6.0),
        P::rect(52.0, 36.0, 24.0, 56.0).rounded(4.0).stroked(4.0),
        P::rect(56.0, 40.0, 16.0, 24.0).rounded(2.0),
    ];
    LIGHT_BULB = "LightBulb", LARGE, [
        P::path("M64 12a36 36 0 0 0-20 66v14h40V78a36 36 0 0 0-20-66z").stroked(5.0).round(),
        P::path("M48 104h32M52 116h24").stroked(5.0).round(),
    ];
    GENERATOR = "Generator", LARGE, [
        P::rect(12.0, 36.0, 104.0, 64.0).rounded(6.0).stroked(6.0),
        P::path("M70 44L48 70h16l-6 22 22-28H64z"),
        P::path("M28 100v12M100 100v12").stroked(6.0),
    ];
    TRANSFORMER = "Transformer", LARGE, [
        P::circle(48.0, 64.0, 28.0).stroked(5.0),
        P::circle(80.0, 64.0, 28.0).stroked(5.0),
    ];
    SOLAR_PANEL = "SolarPanel", LARGE, [
        P::path("M20 24h88l12 64H8z").stroked(5.0).round(),
        P::path("M14 56h100M50 24l-4 64M78 24l4 64").stroked(3.0),
        P::path("M64 88v24M44 116h40").stroked(5.0).round(),
    ];
    ELECTRIC_METER = "ElectricMeter", LARGE, [
        P::circle(64.0, 60.0, 44.0).stroked(6.0),
        P::rect(40.0, 40.0, 48.0, 20.0).rounded(3.0).stroked(4.0),
        P::path("M64 76l16 14").stroked(4.0).round(),
        P::path("M40 104l-8 16M88 104l8 16").stroked(6.0).round(),
    ];
    BATTERY = "Battery", SMALL, [
        P::rect(3.0, 9.0, 24.0, 14.0).rounded(2.0).stroked(2.0),
        P::rect(27.0, 13.0, 3.0, 6.0).rounded(1.0),
        P::rect(6.0, 12.0, 12.0, 8.0),
    ];

    // --- Mechanical & plumbing ---
    FAN = "Fan", LARGE, [
        P::circle(64.0, 64.0, 10.0),
        P::path(
            "M64 54C58 30 70 14 86 22s6 30-16 34M74 64c24-6 40 6 32 22s-30 6-34-16\
             M64 74c6 24-6 40-22 32s-6-30 16-34M54 64c-24 6-40-6-32-22s30-6 34 16",
        )
        .stroked(4.0)
        .round(),
    ];
    PUMP = "Pump", LARGE, [
        P::circle(56.0, 72.0, 36.0).stroked(6.0),
        P::circle(56.0, 72.0, 10.0),
        P::path("M56 36h52v20H84").stroked(6.0).round(),
        P::path("M20 116h72").stroked(6.0).round(),
    ];
    VALVE = "Valve", LARGE, [
        P::path("M16 40l48 24-48 24zM112 40L64 64l48 24z").stroked(5.0),
        P::path("M64 64V24M48 24h32").stroked(5.0).round(),
    ];
    BOILER = "Boiler", LARGE, [
        P::rect(28.0, 12.0, 72.0, 104.0).rounded(10.0).stroked(6.0),
        P::rect(44.0, 24.0, 40.0, 12.0).rounded(3.0).stroked(3.0),
        P::path("M64 52c10 12 14 20 14 28a14 14 0 0 1-28 0c0-6 4-12 8-16 0 6 2 10 6 10 0-8-2-14 0-22z"),
    ];
    CHILLER = "Chiller", LARGE, [
        P::rect(12.0, 28.0, 104.0, 72.0).rounded(8.0).stroked(6.0),
        P::path("M64 40v48M43 52l42 24M43 76l42-24").stroked(4.0).round(),
    ];
    AIR_HANDLER = "AirHandler", LARGE, [
        P::rect(8.0, 32.0, 112.0, 64.0).rounded(6.0).stroked(6.0),
        P::circle(44.0, 64.0, 18.0).stroked(4.0),
        P::path("M76 48h28M76 64h28M76 80h28").stroked(4.0).round(),
    ];
    WATER_HEATER = "WaterHeater", LARGE, [
        P::rect(32.0, 16.0, 64.0, 100.0).rounded(24.0).stroked(6.0),
        P::path("M52 116v8M76 116v8").stroked(6.0),
        P::path("M64 44c8 10 12 18 12 24a12 12 0 0 1-24 0c0-6 4-14 12-24z"),
    ];
    THERMOSTAT = "Thermostat", UPRIGHT, [
        P::circle(16.0, 16.0, 13.0).stroked(2.0),
        P::circle(16.0, 16.0, 8.0).opacity(0.2),
        P::path("M16 10v6l4 3").stroked(2.0).round(),
        P::rect(10.0, 30.0, 12.0, 3.0).rounded(1.5),
    ];
    WATER_LEAK_SENSOR = "WaterLeakSensor", SMALL, [
        P::path("M16 4c6 8 9 13 9 17a9 9 0 0 1-18 0c0-4 3-9 9-17z").stroked(2.0),
        P::path("M4 30h24").stroked(2.0).round(),
    ];
    GAS_METER = "GasMeter", UPRIGHT, [
        P::rect(4.0, 2.0, 24.0, 24.0).rounded(3.0).stroked(2.0),
        P::rect(9.0, 7.0, 14.0, 6.0).rounded(1.0),
        P::path("M10 26v6M22 26v6").stroked(2.0).round(),
    ];

    // --- IT & security ---
    SERVER = "Server", LARGE, [
        P::rect(20.0, 12.0, 88.0, 32.0).rounded(6.0).stroked(5.0),
        P::rect(20.0, 48.0, 88.0, 32.0).rounded(6.0).stroked(5.0),
        P::rect(20.0, 84.0, 88.0, 32.0).rounded(6.0).stroked(5.0),
        P::circle(36.0, 28.0, 4.0),
        P::circle(36.0, 64.0, 4.0),
        P::circle(36.0, 100.0, 4.0),
    ];
    NETWORK_ROUTER = "NetworkRouter", LARGE, [
        P::rect(12.0, 68.0, 104.0, 40.0).rounded(8.0).stroked(5.0),
        P::path("M36 68V40M92 68V40").stroked(5.0).round(),
        P::circle(32.0, 88.0, 4.0),
        P::circle(48.0, 88.0, 4.0),
        P::path("M72 88h28").stroked(5.0).round(),
    ];
    ACCESS_POINT = "AccessPoint", SMALL, [
        P::path("M4 12a17 17 0 0 1 24 0M8 16a11 11 0 0 1 16 0M12 20a5 5 0 0 1 8 0")
            .stroked(2.0)
            .round(),
        P::circle(16.0, 25.0, 2.0),
    ];
    PRINTER = "Printer", LARGE, [
        P::rect(32.0, 12.0, 64.0, 32.0).stroked(5.0),
        P::rect(12.0, 44.0, 104.0, 48.0).rounded(8.0).stroked(5.0),
        P::rect(32.0, 76.0, 64.0, 40.0).stroked(5.0),
        P::circle(96.0, 60.0, 4.0),
    ];
    SECURITY_CAMERA = "SecurityCamera", LARGE, [
        P::path("M12 40l80-20 8 32-80 20z").stroked(5.0).round(),
        P::path("M96 60l20 28H100").stroked(5.0).round(),
        P::circle(36.0, 48.0, 5.0),
        P::path("M40 76v28H16").stroked(5.0).round(),
    ];
    MOTION_SENSOR = "MotionSensor", LARGE, [
        P::circle(64.0, 64.0, 10.0),
        P::path(
            "M44 44a28 28 0 0 0 0 40M84 44a28 28 0 0 1 0 40\
             M30 30a48 48 0 0 0 0 68M98 30a48 48 0 0 1 0 68",
        )
        .stroked(5.0)
        .round(),
    ];
    DOOR_SENSOR = "DoorSensor", SMALL, [
        P::rect(4.0, 6.0, 10.0, 20.0).rounded(2.0).stroked(2.0),
        P::rect(18.0, 10.0, 10.0, 12.0).rounded(2.0),
        P::path("M16 12v8").stroked(1.0).round(),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_square_glyphs_use_the_upright_canvas() {
        for glyph in [&FIRE_HYDRANT, &THERMOSTAT, &GAS_METER] {
            assert_eq!(glyph.canvas, UPRIGHT);
            assert!(!glyph.canvas.is_square());
        }
    }

    #[test]
    fn fire_alarm_bell_is_outlined() {
        let bell = FIRE_ALARM.primitives[0];
        assert_eq!(bell.style.stroke_width, Some(4.0));
    }
}
