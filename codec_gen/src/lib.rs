pub mod cmds;
pub mod codegen;
