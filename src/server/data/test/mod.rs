mod inscription;
mod selection_result;
mod session;
