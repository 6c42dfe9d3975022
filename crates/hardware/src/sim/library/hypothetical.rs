//! Hypothetical machine scenarios.
//!
//! Programs live at 0x1xx and their data at 0x2xx, so the memory table shows the
//! program as instructions and the operands as decimal data.

use super::{
    ADDING, DECODING, EXEC_ALU_ADD, EXEC_ALU_SUB, EXEC_MBR_TO_AC, EXEC_READ_DATA,
    FETCH_INCREMENT_PC, FETCH_PC_TO_MAR, SUBTRACTING,
};
use crate::common::reg::Reg::{Ac, Ir, Mar, Mbr, Pc};
use crate::core::control::ControlUnit::{Alu, Control};
use crate::sim::scenario::{ScenarioScript, Step};

const FETCH_READ_INSTRUCTION: &str = "Fetch cycle - Read instruction from memory into MBR";
const FETCH_MBR_TO_IR: &str = "Fetch cycle - Transfer instruction from MBR to IR";

/// Registered scripts, in menu order.
pub static SCENARIOS: [ScenarioScript; 3] = [BASIC_SUM, BASIC_SUBTRACTION, TRIPLE_SUM];

const BASIC_SUM: ScenarioScript = ScenarioScript {
    id: 1,
    display_name: "Basic Sum (5 + 10)",
    initial_memory: &[
        (0x100, 0x1200), // LOAD M(0x200)
        (0x101, 0x5201), // ADD M(0x201)
        (0x102, 0x2202), // STOR M(0x202)
        (0x200, 5),
        (0x201, 10),
        (0x202, 0),
    ],
    initial_pc: 0x100,
    steps: &[
        // LOAD M(0x200)
        Step::reg(Mar, 0x100, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x1200, FETCH_READ_INSTRUCTION),
        Step::reg(Pc, 0x101, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x1200, FETCH_MBR_TO_IR),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction LOAD M(0x200)",
        ),
        Step::reg(
            Mar,
            0x200,
            "Execute cycle - Extract operand address (0x200) into MAR",
        ),
        Step::reg(Mbr, 5, EXEC_READ_DATA),
        Step::reg(Ac, 5, EXEC_MBR_TO_AC),
        // ADD M(0x201)
        Step::reg(Mar, 0x101, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x5201, FETCH_READ_INSTRUCTION),
        Step::reg(Pc, 0x102, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x5201, FETCH_MBR_TO_IR),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction ADD M(0x201)",
        ),
        Step::reg(
            Mar,
            0x201,
            "Execute cycle - Extract operand address (0x201) into MAR",
        ),
        Step::reg(Mbr, 10, EXEC_READ_DATA),
        Step::ctl(Alu, ADDING, EXEC_ALU_ADD),
        Step::reg(Ac, 15, "Execute cycle - Add MBR (10) to AC (5) = 15"),
        // STOR M(0x202)
        Step::reg(Mar, 0x102, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x2202, FETCH_READ_INSTRUCTION),
        Step::reg(Pc, 0x103, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x2202, FETCH_MBR_TO_IR),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction STOR M(0x202)",
        ),
        Step::reg(
            Mar,
            0x202,
            "Execute cycle - Extract operand address (0x202) into MAR",
        ),
        Step::reg(Mbr, 15, "Execute cycle - Copy AC (15) to MBR"),
        Step::mem(
            0x202,
            15,
            "Execute cycle - Write MBR (15) to memory (0x202)",
        ),
    ],
};

const BASIC_SUBTRACTION: ScenarioScript = ScenarioScript {
    id: 2,
    display_name: "Basic Subtraction (20 - 8)",
    initial_memory: &[
        (0x110, 0x1210), // LOAD M(0x210)
        (0x111, 0x6211), // SUB M(0x211)
        (0x112, 0x2212), // STOR M(0x212)
        (0x210, 20),
        (0x211, 8),
        (0x212, 0),
    ],
    initial_pc: 0x110,
    steps: &[
        // LOAD M(0x210)
        Step::reg(Mar, 0x110, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x1210, FETCH_READ_INSTRUCTION),
        Step::reg(Pc, 0x111, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x1210, FETCH_MBR_TO_IR),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction LOAD M(0x210)",
        ),
        Step::reg(
            Mar,
            0x210,
            "Execute cycle - Extract operand address (0x210) into MAR",
        ),
        Step::reg(Mbr, 20, EXEC_READ_DATA),
        Step::reg(Ac, 20, EXEC_MBR_TO_AC),
        // SUB M(0x211)
        Step::reg(Mar, 0x111, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x6211, FETCH_READ_INSTRUCTION),
        Step::reg(Pc, 0x112, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x6211, FETCH_MBR_TO_IR),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction SUB M(0x211)",
        ),
        Step::reg(
            Mar,
            0x211,
            "Execute cycle - Extract operand address (0x211) into MAR",
        ),
        Step::reg(Mbr, 8, EXEC_READ_DATA),
        Step::ctl(Alu, SUBTRACTING, EXEC_ALU_SUB),
        Step::reg(Ac, 12, "Execute cycle - Subtract MBR (8) from AC (20) = 12"),
        // STOR M(0x212)
        Step::reg(Mar, 0x112, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x2212, FETCH_READ_INSTRUCTION),
        Step::reg(Pc, 0x113, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x2212, FETCH_MBR_TO_IR),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction STOR M(0x212)",
        ),
        Step::reg(
            Mar,
            0x212,
            "Execute cycle - Extract operand address (0x212) into MAR",
        ),
        Step::reg(Mbr, 12, "Execute cycle - Copy AC (12) to MBR"),
        Step::mem(
            0x212,
            12,
            "Execute cycle - Write MBR (12) to memory (0x212)",
        ),
    ],
};

const TRIPLE_SUM: ScenarioScript = ScenarioScript {
    id: 3,
    display_name: "Triple Sum (4 + 7 + 9)",
    initial_memory: &[
        (0x120, 0x1220), // LOAD M(0x220)
        (0x121, 0x5221), // ADD M(0x221)
        (0x122, 0x5222), // ADD M(0x222)
        (0x123, 0x2223), // STOR M(0x223)
        (0x220, 4),
        (0x221, 7),
        (0x222, 9),
        (0x223, 0),
    ],
    initial_pc: 0x120,
    steps: &[
        // LOAD M(0x220)
        Step::reg(Mar, 0x120, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x1220, FETCH_READ_INSTRUCTION),
        Step::reg(Pc, 0x121, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x1220, FETCH_MBR_TO_IR),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction LOAD M(0x220)",
        ),
        Step::reg(
            Mar,
            0x220,
            "Execute cycle - Extract operand address (0x220) into MAR",
        ),
        Step::reg(Mbr, 4, EXEC_READ_DATA),
        Step::reg(Ac, 4, EXEC_MBR_TO_AC),
        // ADD M(0x221)
        Step::reg(Mar, 0x121, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x5221, FETCH_READ_INSTRUCTION),
        Step::reg(Pc, 0x122, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x5221, FETCH_MBR_TO_IR),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction ADD M(0x221)",
        ),
        Step::reg(
            Mar,
            0x221,
            "Execute cycle - Extract operand address (0x221) into MAR",
        ),
        Step::reg(Mbr, 7, EXEC_READ_DATA),
        Step::ctl(Alu, ADDING, EXEC_ALU_ADD),
        Step::reg(Ac, 11, "Execute cycle - Add MBR (7) to AC (4) = 11"),
        // ADD M(0x222)
        Step::reg(Mar, 0x122, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x5222, FETCH_READ_INSTRUCTION),
        Step::reg(Pc, 0x123, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x5222, FETCH_MBR_TO_IR),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction ADD M(0x222)",
        ),
        Step::reg(
            Mar,
            0x222,
            "Execute cycle - Extract operand address (0x222) into MAR",
        ),
        Step::reg(Mbr, 9, EXEC_READ_DATA),
        Step::ctl(Alu, ADDING, EXEC_ALU_ADD),
        Step::reg(Ac, 20, "Execute cycle - Add MBR (9) to AC (11) = 20"),
        // STOR M(0x223)
        Step::reg(Mar, 0x123, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x2223, FETCH_READ_INSTRUCTION),
        Step::reg(Pc, 0x124, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x2223, FETCH_MBR_TO_IR),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction STOR M(0x223)",
        ),
        Step::reg(
            Mar,
            0x223,
            "Execute cycle - Extract operand address (0x223) into MAR",
        ),
        Step::reg(Mbr, 20, "Execute cycle - Copy AC (20) to MBR"),
        Step::mem(
            0x223,
            20,
            "Execute cycle - Write MBR (20) to memory (0x223)",
        ),
    ],
};
