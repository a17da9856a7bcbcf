mod audio;
mod character;
