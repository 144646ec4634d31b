mod tilt;
mod vector;
