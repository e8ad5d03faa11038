mod input;
mod view;
