enum TestEnum { Q, W, E, R, T, Y }
