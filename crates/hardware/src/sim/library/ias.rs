//! IAS scenarios.
//!
//! Each fetch brings a whole 40-bit word into MBR; the left opcode goes to IR and the
//! right instruction waits in IBR until the left one has executed.

use super::{
    DECODING, DIVIDING, EXEC_MBR_TO_AC, EXEC_READ_DATA, FETCH_INCREMENT_PC, FETCH_PC_TO_MAR,
    MULTIPLYING,
};
use crate::common::reg::Reg::{Ac, Ibr, Ir, Mar, Mbr, Mq, Pc};
use crate::core::control::ControlUnit::{Alu, Control};
use crate::sim::scenario::{ScenarioScript, Step};

const FETCH_READ_WORD: &str = "Fetch cycle - Read word from memory into MBR";
const FETCH_LEFT_OPCODE: &str = "Fetch cycle - Extract left opcode into IR";
const FETCH_RIGHT_TO_IBR: &str = "Fetch cycle - Extract right instruction into IBR";
const EXEC_RIGHT_OPCODE: &str = "Execute cycle - Load right opcode into IR";

/// Registered scripts, in menu order.
pub static SCENARIOS: [ScenarioScript; 2] = [BASIC_SUM, MULTIPLY_DIVIDE];

// The operands sit at 0xFA/0xFB, inside the instruction region, so the memory table
// decodes them as instruction pairs.
const BASIC_SUM: ScenarioScript = ScenarioScript {
    id: 1,
    display_name: "Basic Sum (5 + 10)",
    initial_memory: &[
        (0x000, 0x010FA210FB),
        (0x001, 0x010FA0F08D),
        (0x002, 0x020FA210FB),
        (0x0FA, 5),
        (0x0FB, 10),
    ],
    initial_pc: 0,
    steps: &[
        // Fetch word 0
        Step::reg(Mar, 0x000, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x010FA210FB, FETCH_READ_WORD),
        Step::reg(Pc, 0x001, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x01, FETCH_LEFT_OPCODE),
        Step::reg(Ibr, 0x0FA210FB, FETCH_RIGHT_TO_IBR),
        // LOAD M(0xFA)
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction LOAD M(0xFA)",
        ),
        Step::reg(
            Mar,
            0x0FA,
            "Execute cycle - Extract operand address (0xFA) into MAR",
        ),
        Step::reg(Mbr, 5, EXEC_READ_DATA),
        Step::reg(Ac, 5, EXEC_MBR_TO_AC),
        // STOR M(0xFB)
        Step::reg(Ir, 0x02, EXEC_RIGHT_OPCODE),
        Step::reg(
            Mar,
            0x0FB,
            "Execute cycle - Extract operand address (0xFB) into MAR",
        ),
        Step::reg(Mbr, 5, "Execute cycle - Copy AC (5) to MBR"),
        Step::mem(0x0FB, 5, "Execute cycle - Write MBR (5) to memory (0xFB)"),
        // Fetch word 1
        Step::reg(Mar, 0x001, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x010FA0F08D, FETCH_READ_WORD),
        Step::reg(Pc, 0x002, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x01, FETCH_LEFT_OPCODE),
        Step::reg(Ibr, 0x0FA0F08D, FETCH_RIGHT_TO_IBR),
        // LOAD M(0xFA)
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction LOAD M(0xFA)",
        ),
        Step::reg(
            Mar,
            0x0FA,
            "Execute cycle - Extract operand address (0xFA) into MAR",
        ),
        Step::reg(Mbr, 5, EXEC_READ_DATA),
        Step::reg(Ac, 5, EXEC_MBR_TO_AC),
        // JUMP+ M(0x8D)
        Step::reg(Ir, 0x0F, EXEC_RIGHT_OPCODE),
        Step::reg(
            Pc,
            0x08D,
            "Execute cycle - Jump to address 0x8D if AC is positive",
        ),
    ],
};

const MULTIPLY_DIVIDE: ScenarioScript = ScenarioScript {
    id: 2,
    display_name: "Multiply and Divide (20 * 4, 20 / 4)",
    initial_memory: &[
        (0x000, 0x011000E101), // LOAD M(0x100), MUL M(0x101)
        (0x001, 0x0510201100), // STOR M(0x102), LOAD M(0x100)
        (0x002, 0x0F10105103), // DIV M(0x101), STOR M(0x103)
        (0x100, 20),
        (0x101, 4),
        (0x102, 0),
        (0x103, 0),
    ],
    initial_pc: 0,
    steps: &[
        // Fetch word 0
        Step::reg(Mar, 0x000, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x011000E101, FETCH_READ_WORD),
        Step::reg(Pc, 0x001, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x01, FETCH_LEFT_OPCODE),
        Step::reg(Ibr, 0x0E101, FETCH_RIGHT_TO_IBR),
        // LOAD M(0x100)
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction LOAD M(0x100)",
        ),
        Step::reg(
            Mar,
            0x100,
            "Execute cycle - Extract operand address (0x100) into MAR",
        ),
        Step::reg(Mbr, 20, EXEC_READ_DATA),
        Step::reg(Ac, 20, EXEC_MBR_TO_AC),
        // MUL M(0x101)
        Step::reg(Ir, 0x0E, EXEC_RIGHT_OPCODE),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction MUL M(0x101)",
        ),
        Step::reg(
            Mar,
            0x101,
            "Execute cycle - Extract operand address (0x101) into MAR",
        ),
        Step::reg(Mbr, 4, EXEC_READ_DATA),
        Step::ctl(
            Alu,
            MULTIPLYING,
            "Execute cycle - ALU performing multiplication",
        ),
        Step::reg(Ac, 80, "Execute cycle - Multiply AC (20) by MBR (4) = 80"),
        Step::reg(Mq, 0, "Execute cycle - Store product in AC and clear MQ"),
        // Fetch word 1
        Step::reg(Mar, 0x001, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x0510201100, FETCH_READ_WORD),
        Step::reg(Pc, 0x002, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x05, FETCH_LEFT_OPCODE),
        Step::reg(Ibr, 0x01100, FETCH_RIGHT_TO_IBR),
        // STOR M(0x102)
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction STOR M(0x102)",
        ),
        Step::reg(
            Mar,
            0x102,
            "Execute cycle - Extract operand address (0x102) into MAR",
        ),
        Step::reg(Mbr, 80, "Execute cycle - Copy AC (80) to MBR"),
        Step::mem(
            0x102,
            80,
            "Execute cycle - Write MBR (80) to memory (0x102)",
        ),
        // LOAD M(0x100)
        Step::reg(Ir, 0x01, EXEC_RIGHT_OPCODE),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction LOAD M(0x100)",
        ),
        Step::reg(
            Mar,
            0x100,
            "Execute cycle - Extract operand address (0x100) into MAR",
        ),
        Step::reg(Mbr, 20, EXEC_READ_DATA),
        Step::reg(Ac, 20, EXEC_MBR_TO_AC),
        // Fetch word 2
        Step::reg(Mar, 0x002, FETCH_PC_TO_MAR),
        Step::reg(Mbr, 0x0F10105103, FETCH_READ_WORD),
        Step::reg(Pc, 0x003, FETCH_INCREMENT_PC),
        Step::reg(Ir, 0x0F, FETCH_LEFT_OPCODE),
        Step::reg(Ibr, 0x05103, FETCH_RIGHT_TO_IBR),
        // DIV M(0x101)
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction DIV M(0x101)",
        ),
        Step::reg(
            Mar,
            0x101,
            "Execute cycle - Extract operand address (0x101) into MAR",
        ),
        Step::reg(Mbr, 4, EXEC_READ_DATA),
        Step::ctl(Alu, DIVIDING, "Execute cycle - ALU performing division"),
        Step::reg(
            Mq,
            5,
            "Execute cycle - Divide AC (20) by MBR (4) = 5, quotient into MQ",
        ),
        Step::reg(Ac, 0, "Execute cycle - Store remainder (0) in AC"),
        // STOR M(0x103)
        Step::reg(Ir, 0x05, EXEC_RIGHT_OPCODE),
        Step::ctl(
            Control,
            DECODING,
            "Execute cycle - Decode instruction STOR M(0x103)",
        ),
        Step::reg(
            Mar,
            0x103,
            "Execute cycle - Extract operand address (0x103) into MAR",
        ),
        Step::reg(Mbr, 5, "Execute cycle - Copy MQ (5) to MBR"),
        Step::mem(0x103, 5, "Execute cycle - Write MBR (5) to memory (0x103)"),
    ],
};
