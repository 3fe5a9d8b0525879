mod decode;
mod install;
mod registry;
